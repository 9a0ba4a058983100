//! Observable form state container

use crate::{reduce, Action};
use resume_model::{EntryId, EntryUpdate, ProfileField, ResumeData, Section};
use tokio::sync::watch;

/// Owns the current [`ResumeData`] and publishes each new state.
///
/// Views hold a [`watch::Receiver`] obtained from [`FormStore::subscribe`]
/// and re-render when it reports a change. All mutations run synchronously
/// to completion; there is no interleaving between them.
pub struct FormStore {
    /// Latest state; receivers observe every replacement
    state: watch::Sender<ResumeData>,
    /// Number of actions applied so far
    version: u64,
}

impl FormStore {
    /// Create a store holding `initial`
    pub fn new(initial: ResumeData) -> Self {
        let (state, _) = watch::channel(initial);
        Self { state, version: 0 }
    }

    /// Create a store seeded with the sample resume
    pub fn with_sample() -> Self {
        Self::new(resume_model::sample_resume())
    }

    /// A cheap copy of the current state
    pub fn snapshot(&self) -> ResumeData {
        self.state.borrow().clone()
    }

    /// Number of actions applied since creation
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Subscribe to state replacements
    pub fn subscribe(&self) -> watch::Receiver<ResumeData> {
        self.state.subscribe()
    }

    /// Apply an action and notify subscribers
    pub fn dispatch(&mut self, action: Action) {
        let next = reduce(&self.state.borrow(), &action);
        self.state.send_replace(next);
        self.version += 1;

        tracing::debug!(
            action = action.display_name(),
            section = ?action.section(),
            version = self.version,
            "Applied store action"
        );
    }

    pub fn set_profile_field(&mut self, field: ProfileField, value: impl Into<String>) {
        self.dispatch(Action::set_profile_field(field, value));
    }

    pub fn add_entry(&mut self, section: Section) {
        self.dispatch(Action::add_entry(section));
    }

    pub fn remove_entry(&mut self, section: Section, id: EntryId) {
        self.dispatch(Action::remove_entry(section, id));
    }

    pub fn update_entry_field(&mut self, id: EntryId, update: EntryUpdate) {
        self.dispatch(Action::update_entry_field(id, update));
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::with_sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_dispatch_notifies_subscribers() {
        let mut store = FormStore::new(ResumeData::new());
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.add_entry(Section::Skills);

        assert!(rx.has_changed().unwrap());
        let seen = rx.borrow_and_update().clone();
        assert_eq!(seen.skills.len(), 1);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_noop_removal_still_publishes_new_collection() {
        let mut store = FormStore::with_sample();
        let before = store.snapshot();

        store.remove_entry(Section::Education, EntryId::new(42));
        let after = store.snapshot();

        assert_eq!(before, after);
        assert!(!Arc::ptr_eq(&before.education, &after.education));
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_profile_edit_through_helpers() {
        let mut store = FormStore::new(ResumeData::new());
        store.set_profile_field(ProfileField::FullName, "Ada Lovelace");
        store.update_entry_field(EntryId::FIRST, EntryUpdate::SkillName { value: "x".into() });

        let state = store.snapshot();
        assert_eq!(state.profile.full_name, "Ada Lovelace");
        assert!(state.skills.is_empty());
        assert_eq!(store.version(), 2);
    }
}
