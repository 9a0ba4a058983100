//! Typed operations over the three entry collections
//!
//! A [`CollectionLens`] maps a section to the collection it owns, so the
//! reducer can run one generic implementation of add/remove/update for every
//! section instead of branching on section names.

use resume_model::{EducationEntry, Entry, EntryId, ExperienceEntry, ResumeData, SkillEntry};
use std::sync::Arc;

/// Accessor pair for one collection inside [`ResumeData`]
pub(crate) struct CollectionLens<E: Entry> {
    get: fn(&ResumeData) -> &Arc<Vec<E>>,
    set: fn(&mut ResumeData, Arc<Vec<E>>),
}

pub(crate) const EXPERIENCE: CollectionLens<ExperienceEntry> = CollectionLens {
    get: |state| &state.experience,
    set: |state, entries| state.experience = entries,
};

pub(crate) const EDUCATION: CollectionLens<EducationEntry> = CollectionLens {
    get: |state| &state.education,
    set: |state, entries| state.education = entries,
};

pub(crate) const SKILLS: CollectionLens<SkillEntry> = CollectionLens {
    get: |state| &state.skills,
    set: |state, entries| state.skills = entries,
};

impl<E: Entry> CollectionLens<E> {
    /// Append a blank entry with the next identifier
    pub(crate) fn add(&self, state: &mut ResumeData) {
        let current = (self.get)(state);
        let id = EntryId::next_after(current.iter().map(Entry::id));
        let mut entries = Vec::with_capacity(current.len() + 1);
        entries.extend(current.iter().cloned());
        entries.push(E::blank(id));
        (self.set)(state, Arc::new(entries));
    }

    /// Drop the entry with `id`; the collection is replaced even if nothing matched
    pub(crate) fn remove(&self, state: &mut ResumeData, id: EntryId) {
        let entries: Vec<E> = (self.get)(state)
            .iter()
            .filter(|entry| entry.id() != id)
            .cloned()
            .collect();
        (self.set)(state, Arc::new(entries));
    }

    /// Apply `edit` to the entry with `id`, leaving every other entry untouched
    pub(crate) fn update(&self, state: &mut ResumeData, id: EntryId, edit: impl FnOnce(&mut E)) {
        let mut entries: Vec<E> = (self.get)(state).as_ref().clone();
        if let Some(entry) = entries.iter_mut().find(|entry| entry.id() == id) {
            edit(entry);
        }
        (self.set)(state, Arc::new(entries));
    }
}
