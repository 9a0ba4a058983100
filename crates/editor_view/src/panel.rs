//! Panel view models
//!
//! A panel is rebuilt from the current store state each time it is shown;
//! it holds copies of the bound values and never mutates anything itself.

use crate::field::{FieldTarget, InputKind};
use crate::tab::EditorTab;
use charts::Color;
use preview::{ColorScheme, DisplayLocale};
use resume_model::{
    EducationField, EntryId, ExperienceField, FieldValue, ProfileField, ResumeData, Section,
};
use serde::Serialize;

/// One labelled input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub target: FieldTarget,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: InputKind,
    pub value: FieldValue,
    /// Readout beside the label, e.g. `75%` for the level slider
    pub readout: Option<String>,
}

impl FieldView {
    fn bind(target: FieldTarget, data: &ResumeData, locale: DisplayLocale) -> Option<Self> {
        let value = target.value(data)?;
        let readout = match (&target, &value) {
            (FieldTarget::SkillLevel { .. }, FieldValue::Number(level)) => Some(format!("{}%", level)),
            _ => None,
        };
        Some(Self {
            target,
            label: target.label(locale),
            placeholder: target.placeholder(locale),
            kind: target.input_kind(),
            value,
            readout,
        })
    }
}

/// The sub-form of one list entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryForm {
    pub id: EntryId,
    pub remove_label: &'static str,
    pub fields: Vec<FieldView>,
}

/// Contents of the active tab
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "panel", rename_all = "camelCase")]
pub enum Panel {
    Profile {
        fields: Vec<FieldView>,
    },
    Entries {
        section: Section,
        entries: Vec<EntryForm>,
        add_label: &'static str,
        /// Fill of the add button
        accent: Color,
    },
}

impl Panel {
    /// Build the panel for `tab` from the current state
    pub fn build(tab: EditorTab, data: &ResumeData, locale: DisplayLocale, scheme: ColorScheme) -> Self {
        let Some(section) = tab.section() else {
            let fields = ProfileField::ALL
                .into_iter()
                .filter_map(|field| FieldView::bind(FieldTarget::Profile { field }, data, locale))
                .collect();
            return Panel::Profile { fields };
        };

        let entries = data
            .ids(section)
            .into_iter()
            .map(|id| EntryForm {
                id,
                remove_label: remove_label(locale),
                fields: entry_targets(section, id)
                    .into_iter()
                    .filter_map(|target| FieldView::bind(target, data, locale))
                    .collect(),
            })
            .collect();

        Panel::Entries {
            section,
            entries,
            add_label: add_label(section, locale),
            accent: scheme.accent(),
        }
    }

    /// Every field on the panel, in display order
    pub fn fields(&self) -> Vec<&FieldView> {
        match self {
            Panel::Profile { fields } => fields.iter().collect(),
            Panel::Entries { entries, .. } => entries.iter().flat_map(|e| e.fields.iter()).collect(),
        }
    }

    pub fn entry_count(&self) -> usize {
        match self {
            Panel::Profile { .. } => 0,
            Panel::Entries { entries, .. } => entries.len(),
        }
    }
}

/// Inputs of one entry sub-form, in display order
pub fn entry_targets(section: Section, id: EntryId) -> Vec<FieldTarget> {
    match section {
        Section::Experience => ExperienceField::ALL
            .into_iter()
            .map(|field| FieldTarget::Experience { id, field })
            .collect(),
        Section::Education => EducationField::ALL
            .into_iter()
            .map(|field| FieldTarget::Education { id, field })
            .collect(),
        Section::Skills => vec![FieldTarget::SkillName { id }, FieldTarget::SkillLevel { id }],
    }
}

fn add_label(section: Section, locale: DisplayLocale) -> &'static str {
    match (section, locale) {
        (Section::Experience, DisplayLocale::En) => "Add experience",
        (Section::Education, DisplayLocale::En) => "Add education",
        (Section::Skills, DisplayLocale::En) => "Add skill",
        (Section::Experience, DisplayLocale::Ru) => "Добавить опыт работы",
        (Section::Education, DisplayLocale::Ru) => "Добавить образование",
        (Section::Skills, DisplayLocale::Ru) => "Добавить навык",
    }
}

fn remove_label(locale: DisplayLocale) -> &'static str {
    match locale {
        DisplayLocale::En => "Remove",
        DisplayLocale::Ru => "Удалить",
    }
}
