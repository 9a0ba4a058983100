//! Input events raised by the editor

use crate::error::Result;
use crate::field::FieldTarget;
use crate::tab::EditorTab;
use form_store::Action;
use resume_model::{EntryId, Section};
use serde::{Deserialize, Serialize};

/// Something the user did in the editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EditorEvent {
    /// A tab header was activated
    SelectTab { tab: EditorTab },
    /// An input changed; `value` is the raw control value
    Input { target: FieldTarget, value: String },
    /// The add button of a list panel
    AddEntry { section: Section },
    /// The remove button of one entry
    RemoveEntry { section: Section, id: EntryId },
    /// The download button
    ExportRequested,
}

impl EditorEvent {
    /// The store action this event maps to; `None` for events that do not touch data
    pub fn to_action(&self) -> Result<Option<Action>> {
        Ok(match self {
            EditorEvent::Input { target, value } => Some(target.action(value)?),
            EditorEvent::AddEntry { section } => Some(Action::add_entry(*section)),
            EditorEvent::RemoveEntry { section, id } => Some(Action::remove_entry(*section, *id)),
            EditorEvent::SelectTab { .. } | EditorEvent::ExportRequested => None,
        })
    }
}
