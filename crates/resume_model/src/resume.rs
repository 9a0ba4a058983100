//! The complete resume value owned by the form store

use crate::{EducationEntry, Entry, EntryId, ExperienceEntry, Profile, Section, SkillEntry};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// All data behind one resume.
///
/// Each part sits behind an `Arc` so a mutation can swap in a new value for
/// the part it touches while the untouched parts stay shared. Consumers detect
/// changes with [`Arc::ptr_eq`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub profile: Arc<Profile>,
    pub experience: Arc<Vec<ExperienceEntry>>,
    pub education: Arc<Vec<EducationEntry>>,
    pub skills: Arc<Vec<SkillEntry>>,
}

impl ResumeData {
    /// Create an empty resume
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifiers of one collection, in display order
    pub fn ids(&self, section: Section) -> Vec<EntryId> {
        match section {
            Section::Experience => collect_ids(&self.experience),
            Section::Education => collect_ids(&self.education),
            Section::Skills => collect_ids(&self.skills),
        }
    }

    /// Number of entries in one collection
    pub fn len(&self, section: Section) -> usize {
        match section {
            Section::Experience => self.experience.len(),
            Section::Education => self.education.len(),
            Section::Skills => self.skills.len(),
        }
    }

    pub fn experience_entry(&self, id: EntryId) -> Option<&ExperienceEntry> {
        self.experience.iter().find(|e| e.id == id)
    }

    pub fn education_entry(&self, id: EntryId) -> Option<&EducationEntry> {
        self.education.iter().find(|e| e.id == id)
    }

    pub fn skill(&self, id: EntryId) -> Option<&SkillEntry> {
        self.skills.iter().find(|e| e.id == id)
    }
}

fn collect_ids<E: Entry>(entries: &[E]) -> Vec<EntryId> {
    entries.iter().map(Entry::id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_resume() {
        let resume = ResumeData::new();
        for section in Section::ALL {
            assert_eq!(resume.len(section), 0);
            assert!(resume.ids(section).is_empty());
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let resume = ResumeData {
            skills: Arc::new(vec![SkillEntry {
                id: EntryId::new(2),
                name: "Rust".to_string(),
                level: 80,
            }]),
            ..Default::default()
        };

        assert_eq!(resume.skill(EntryId::new(2)).map(|s| s.level), Some(80));
        assert!(resume.skill(EntryId::new(1)).is_none());
        assert_eq!(resume.ids(Section::Skills), vec![EntryId::new(2)]);
    }

    #[test]
    fn test_serde_round_trip_preserves_content() {
        let resume = crate::sample_resume();
        let json = serde_json::to_string(&resume).unwrap();
        let back: ResumeData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resume);
    }
}
