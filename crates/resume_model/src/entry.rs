//! Entry types for the three ordered collections

use crate::{EducationField, EntryId, ExperienceField, Section};
use serde::{Deserialize, Serialize};

/// Level given to a newly added skill
pub const DEFAULT_SKILL_LEVEL: i32 = 50;

/// Common behaviour of collection members
pub trait Entry: Clone + PartialEq + std::fmt::Debug {
    /// The collection this entry type lives in
    const SECTION: Section;

    fn id(&self) -> EntryId;

    /// A fully populated entry with empty text and default values
    fn blank(id: EntryId) -> Self;
}

/// Read access shared by entries that render as a dated timeline item
pub trait TimelineEntry: Entry {
    /// Position held or degree earned
    fn title(&self) -> &str;
    /// Company or institution
    fn organization(&self) -> &str;
    fn start_date(&self) -> &str;
    /// Empty means the period is ongoing
    fn end_date(&self) -> &str;
    fn description(&self) -> &str;

    fn is_ongoing(&self) -> bool {
        self.end_date().is_empty()
    }
}

/// A position held at a company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub company: String,
    pub position: String,
    /// Free-form year-month, e.g. `2021-06`
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl ExperienceEntry {
    pub fn get(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Company => &self.company,
            ExperienceField::Position => &self.position,
            ExperienceField::StartDate => &self.start_date,
            ExperienceField::EndDate => &self.end_date,
            ExperienceField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: ExperienceField, value: String) {
        let slot = match field {
            ExperienceField::Company => &mut self.company,
            ExperienceField::Position => &mut self.position,
            ExperienceField::StartDate => &mut self.start_date,
            ExperienceField::EndDate => &mut self.end_date,
            ExperienceField::Description => &mut self.description,
        };
        *slot = value;
    }
}

impl Entry for ExperienceEntry {
    const SECTION: Section = Section::Experience;

    fn id(&self) -> EntryId {
        self.id
    }

    fn blank(id: EntryId) -> Self {
        Self {
            id,
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }
}

impl TimelineEntry for ExperienceEntry {
    fn title(&self) -> &str {
        &self.position
    }

    fn organization(&self) -> &str {
        &self.company
    }

    fn start_date(&self) -> &str {
        &self.start_date
    }

    fn end_date(&self) -> &str {
        &self.end_date
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// A course of study at an institution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: EntryId,
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl EducationEntry {
    pub fn get(&self, field: EducationField) -> &str {
        match field {
            EducationField::Institution => &self.institution,
            EducationField::Degree => &self.degree,
            EducationField::StartDate => &self.start_date,
            EducationField::EndDate => &self.end_date,
            EducationField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: EducationField, value: String) {
        let slot = match field {
            EducationField::Institution => &mut self.institution,
            EducationField::Degree => &mut self.degree,
            EducationField::StartDate => &mut self.start_date,
            EducationField::EndDate => &mut self.end_date,
            EducationField::Description => &mut self.description,
        };
        *slot = value;
    }
}

impl Entry for EducationEntry {
    const SECTION: Section = Section::Education;

    fn id(&self) -> EntryId {
        self.id
    }

    fn blank(id: EntryId) -> Self {
        Self {
            id,
            institution: String::new(),
            degree: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }
}

impl TimelineEntry for EducationEntry {
    fn title(&self) -> &str {
        &self.degree
    }

    fn organization(&self) -> &str {
        &self.institution
    }

    fn start_date(&self) -> &str {
        &self.start_date
    }

    fn end_date(&self) -> &str {
        &self.end_date
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// A named skill with a proficiency level.
///
/// The level is stored exactly as supplied; the range control and the
/// renderers keep it within 0..=100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: EntryId,
    pub name: String,
    pub level: i32,
}

impl SkillEntry {
    /// Level limited to the displayable 0..=100 range
    pub fn clamped_level(&self) -> i32 {
        self.level.clamp(0, 100)
    }
}

impl Entry for SkillEntry {
    const SECTION: Section = Section::Skills;

    fn id(&self) -> EntryId {
        self.id
    }

    fn blank(id: EntryId) -> Self {
        Self {
            id,
            name: String::new(),
            level: DEFAULT_SKILL_LEVEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_entries_are_fully_populated() {
        let exp = ExperienceEntry::blank(EntryId::new(3));
        assert_eq!(exp.id, EntryId::new(3));
        assert!(exp.company.is_empty() && exp.end_date.is_empty());
        assert!(exp.is_ongoing());

        let skill = SkillEntry::blank(EntryId::FIRST);
        assert_eq!(skill.level, DEFAULT_SKILL_LEVEL);
        assert!(skill.name.is_empty());
    }

    #[test]
    fn test_set_field_by_key() {
        let mut edu = EducationEntry::blank(EntryId::FIRST);
        edu.set(EducationField::Degree, "MSc".to_string());
        assert_eq!(edu.get(EducationField::Degree), "MSc");
        assert_eq!(edu.title(), "MSc");
        assert!(edu.get(EducationField::Institution).is_empty());
    }

    #[test]
    fn test_clamped_level() {
        let mut skill = SkillEntry::blank(EntryId::FIRST);
        skill.level = 140;
        assert_eq!(skill.clamped_level(), 100);
        skill.level = -5;
        assert_eq!(skill.clamped_level(), 0);
    }
}
