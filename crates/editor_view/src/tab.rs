//! Editor tabs

use crate::error::{EditorError, Result};
use preview::DisplayLocale;
use resume_model::Section;
use serde::{Deserialize, Serialize};

/// One of the four mutually exclusive editor panels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorTab {
    #[default]
    Basic,
    Experience,
    Education,
    Skills,
}

impl EditorTab {
    pub const ALL: [EditorTab; 4] = [
        EditorTab::Basic,
        EditorTab::Experience,
        EditorTab::Education,
        EditorTab::Skills,
    ];

    pub fn key(self) -> &'static str {
        match self {
            EditorTab::Basic => "basic",
            EditorTab::Experience => "experience",
            EditorTab::Education => "education",
            EditorTab::Skills => "skills",
        }
    }

    pub fn parse(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.key() == key)
            .ok_or_else(|| EditorError::UnknownTab(key.to_string()))
    }

    /// The list section edited on this tab, if it is a list tab
    pub fn section(self) -> Option<Section> {
        match self {
            EditorTab::Basic => None,
            EditorTab::Experience => Some(Section::Experience),
            EditorTab::Education => Some(Section::Education),
            EditorTab::Skills => Some(Section::Skills),
        }
    }

    pub fn label(self, locale: DisplayLocale) -> &'static str {
        match (self, locale) {
            (EditorTab::Basic, DisplayLocale::En) => "Basic",
            (EditorTab::Experience, DisplayLocale::En) => "Experience",
            (EditorTab::Education, DisplayLocale::En) => "Education",
            (EditorTab::Skills, DisplayLocale::En) => "Skills",
            (EditorTab::Basic, DisplayLocale::Ru) => "Основное",
            (EditorTab::Experience, DisplayLocale::Ru) => "Опыт",
            (EditorTab::Education, DisplayLocale::Ru) => "Образование",
            (EditorTab::Skills, DisplayLocale::Ru) => "Навыки",
        }
    }
}
