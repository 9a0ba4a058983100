//! Store actions and the reducer

use crate::collection::{EDUCATION, EXPERIENCE, SKILLS};
use resume_model::{
    EntryId, EntryUpdate, FieldValue, ModelError, ProfileField, ResumeData, Section,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A mutation request against the form state.
///
/// Every action is total: applying it to any state yields a state, and
/// references to missing entries degrade to no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Replace one profile field
    SetProfileField { field: ProfileField, value: String },
    /// Append a blank entry to a collection
    AddEntry { section: Section },
    /// Remove the entry with a matching identifier
    RemoveEntry { section: Section, id: EntryId },
    /// Replace one field on the entry with a matching identifier
    UpdateEntryField { id: EntryId, update: EntryUpdate },
}

impl Action {
    pub fn set_profile_field(field: ProfileField, value: impl Into<String>) -> Self {
        Action::SetProfileField {
            field,
            value: value.into(),
        }
    }

    pub fn add_entry(section: Section) -> Self {
        Action::AddEntry { section }
    }

    pub fn remove_entry(section: Section, id: EntryId) -> Self {
        Action::RemoveEntry { section, id }
    }

    pub fn update_entry_field(id: EntryId, update: EntryUpdate) -> Self {
        Action::UpdateEntryField { id, update }
    }

    /// Build an entry update from string keys.
    ///
    /// Returns an error for unknown sections or fields, or for a value of the
    /// wrong type; callers treat that as a no-op.
    pub fn parse_update(
        section: &str,
        id: EntryId,
        field: &str,
        value: FieldValue,
    ) -> Result<Self, ModelError> {
        let section = Section::parse(section)?;
        let update = EntryUpdate::parse(section, field, value)?;
        Ok(Action::UpdateEntryField { id, update })
    }

    /// The collection this action touches, if any
    pub fn section(&self) -> Option<Section> {
        match self {
            Action::SetProfileField { .. } => None,
            Action::AddEntry { section } | Action::RemoveEntry { section, .. } => Some(*section),
            Action::UpdateEntryField { update, .. } => Some(update.section()),
        }
    }

    /// Short name used in logs
    pub fn display_name(&self) -> &'static str {
        match self {
            Action::SetProfileField { .. } => "set_profile_field",
            Action::AddEntry { .. } => "add_entry",
            Action::RemoveEntry { .. } => "remove_entry",
            Action::UpdateEntryField { .. } => "update_entry_field",
        }
    }
}

/// Apply `action` to `state`, producing the next state.
///
/// The part of the state an action targets is always replaced by a fresh
/// `Arc`, even when the action turns out to be a no-op; untouched parts are
/// shared with the input.
pub fn reduce(state: &ResumeData, action: &Action) -> ResumeData {
    let mut next = state.clone();

    match action {
        Action::SetProfileField { field, value } => {
            next.profile = Arc::new(state.profile.with_field(*field, value.clone()));
        }
        Action::AddEntry { section } => match section {
            Section::Experience => EXPERIENCE.add(&mut next),
            Section::Education => EDUCATION.add(&mut next),
            Section::Skills => SKILLS.add(&mut next),
        },
        Action::RemoveEntry { section, id } => match section {
            Section::Experience => EXPERIENCE.remove(&mut next, *id),
            Section::Education => EDUCATION.remove(&mut next, *id),
            Section::Skills => SKILLS.remove(&mut next, *id),
        },
        Action::UpdateEntryField { id, update } => match update.clone() {
            EntryUpdate::Experience { field, value } => {
                EXPERIENCE.update(&mut next, *id, |entry| entry.set(field, value))
            }
            EntryUpdate::Education { field, value } => {
                EDUCATION.update(&mut next, *id, |entry| entry.set(field, value))
            }
            EntryUpdate::SkillName { value } => {
                SKILLS.update(&mut next, *id, |entry| entry.name = value)
            }
            EntryUpdate::SkillLevel { value } => {
                SKILLS.update(&mut next, *id, |entry| entry.level = value)
            }
        },
    }

    next
}
