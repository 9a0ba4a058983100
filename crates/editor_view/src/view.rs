//! The editor pane

use crate::event::EditorEvent;
use crate::panel::Panel;
use crate::tab::EditorTab;
use charts::Color;
use form_store::FormStore;
use preview::{ColorScheme, DisplayLocale};
use resume_model::ResumeData;
use serde::Serialize;

/// A tab header as drawn in the tab strip
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabView {
    pub tab: EditorTab,
    pub label: &'static str,
    pub active: bool,
    /// Underline and text color of the active tab
    pub accent: Option<Color>,
}

/// What handling an event resulted in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    /// An action was applied to the store
    Dispatched,
    /// Only the active tab changed
    TabChanged,
    /// The event could not be turned into an action and was dropped
    Ignored,
    /// The host should start an export
    ExportRequested,
    /// An export is already running
    ExportBlocked,
}

/// Editor state that is not form data
#[derive(Debug, Clone)]
pub struct EditorView {
    active_tab: EditorTab,
    locale: DisplayLocale,
    scheme: ColorScheme,
    export_pending: bool,
}

impl Default for EditorView {
    fn default() -> Self {
        Self::new(DisplayLocale::default(), ColorScheme::default())
    }
}

impl EditorView {
    pub fn new(locale: DisplayLocale, scheme: ColorScheme) -> Self {
        Self {
            active_tab: EditorTab::Basic,
            locale,
            scheme,
            export_pending: false,
        }
    }

    pub fn active_tab(&self) -> EditorTab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: EditorTab) {
        self.active_tab = tab;
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
    }

    pub fn set_locale(&mut self, locale: DisplayLocale) {
        self.locale = locale;
    }

    pub fn title(&self) -> &'static str {
        match self.locale {
            DisplayLocale::En => "CV Builder",
            DisplayLocale::Ru => "Конструктор резюме",
        }
    }

    pub fn export_label(&self) -> &'static str {
        match self.locale {
            DisplayLocale::En => "Download PDF",
            DisplayLocale::Ru => "Скачать PDF",
        }
    }

    /// Whether the download button accepts clicks
    pub fn export_enabled(&self) -> bool {
        !self.export_pending
    }

    /// Mark an export as started or finished
    pub fn set_export_pending(&mut self, pending: bool) {
        self.export_pending = pending;
    }

    /// The tab strip
    pub fn tabs(&self) -> Vec<TabView> {
        EditorTab::ALL
            .into_iter()
            .map(|tab| {
                let active = tab == self.active_tab;
                TabView {
                    tab,
                    label: tab.label(self.locale),
                    active,
                    accent: active.then(|| self.scheme.accent()),
                }
            })
            .collect()
    }

    /// The active panel bound to `data`
    pub fn panel(&self, data: &ResumeData) -> Panel {
        Panel::build(self.active_tab, data, self.locale, self.scheme)
    }

    /// Route one event. Data events go to the store; malformed input is dropped.
    pub fn handle(&mut self, event: EditorEvent, store: &mut FormStore) -> EditorOutcome {
        match &event {
            EditorEvent::SelectTab { tab } => {
                self.active_tab = *tab;
                return EditorOutcome::TabChanged;
            }
            EditorEvent::ExportRequested => {
                return if self.export_enabled() {
                    EditorOutcome::ExportRequested
                } else {
                    EditorOutcome::ExportBlocked
                };
            }
            _ => {}
        }

        match event.to_action() {
            Ok(Some(action)) => {
                store.dispatch(action);
                EditorOutcome::Dispatched
            }
            Ok(None) => EditorOutcome::Ignored,
            Err(e) => {
                tracing::debug!("Dropped editor input: {}", e);
                EditorOutcome::Ignored
            }
        }
    }
}
