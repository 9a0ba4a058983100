//! String-keyed command surface
//!
//! Each command arrives as one JSON object, e.g.
//! `{"command":"input","section":"experience","id":3,"field":"company","value":"Acme"}`.
//! Keys are parsed into typed targets here; an unknown key is reported back
//! as an error response and never reaches the store.

use crate::state::Session;
use editor_view::{EditorEvent, EditorOutcome, EditorTab, FieldTarget, Panel, TabView};
use export::ExportOutcome;
use preview::{ColorScheme, DisplayLocale, PreviewDocument, Template};
use resume_model::{EntryId, ResumeData, Section};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum Command {
    SelectTab {
        tab: String,
    },
    /// Raw control value for one field; `id` is ignored for `basic`
    Input {
        section: String,
        #[serde(default)]
        id: Option<u32>,
        field: String,
        value: String,
    },
    AddEntry {
        section: String,
    },
    RemoveEntry {
        section: String,
        id: u32,
    },
    SetTemplate {
        template: String,
    },
    #[serde(rename_all = "camelCase")]
    SetColorScheme {
        color_scheme: String,
    },
    SetLocale {
        locale: String,
    },
    Resize {
        width: f64,
    },
    GetEditor,
    GetPreview,
    GetState,
    Export,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "response", rename_all = "camelCase")]
pub enum Response {
    Ok,
    /// The input was well-formed but changed nothing
    Ignored,
    Editor {
        title: &'static str,
        tabs: Vec<TabView>,
        panel: Panel,
        export_label: &'static str,
        export_enabled: bool,
    },
    Preview {
        document: PreviewDocument,
    },
    State {
        data: ResumeData,
        version: u64,
    },
    ExportStarted,
    ExportFinished {
        status: &'static str,
        path: Option<PathBuf>,
    },
    Error {
        message: String,
    },
}

impl Response {
    pub fn error(message: impl Into<String>) -> Self {
        Response::Error {
            message: message.into(),
        }
    }

    pub fn export_finished(outcome: &ExportOutcome) -> Self {
        let (status, path) = match outcome {
            ExportOutcome::Saved { path } => ("saved", Some(path.clone())),
            ExportOutcome::Failed => ("failed", None),
            ExportOutcome::Busy => ("busy", None),
        };
        Response::ExportFinished { status, path }
    }
}

/// Apply one command. `Export` only answers synchronously when it is
/// refused; a started export is run by the caller.
pub fn execute(session: &mut Session, command: Command) -> Result<Response, String> {
    match command {
        Command::SelectTab { tab } => {
            let tab = EditorTab::parse(&tab).map_err(|e| e.to_string())?;
            Ok(editor_response(session.handle(EditorEvent::SelectTab { tab })))
        }
        Command::Input {
            section,
            id,
            field,
            value,
        } => {
            let id = EntryId::from(id.unwrap_or_default());
            let target = FieldTarget::parse(&section, id, &field).map_err(|e| e.to_string())?;
            Ok(editor_response(session.handle(EditorEvent::Input { target, value })))
        }
        Command::AddEntry { section } => {
            let section = Section::parse(&section).map_err(|e| e.to_string())?;
            Ok(editor_response(session.handle(EditorEvent::AddEntry { section })))
        }
        Command::RemoveEntry { section, id } => {
            let section = Section::parse(&section).map_err(|e| e.to_string())?;
            let event = EditorEvent::RemoveEntry {
                section,
                id: EntryId::from(id),
            };
            Ok(editor_response(session.handle(event)))
        }
        Command::SetTemplate { template } => {
            let template =
                Template::parse(&template).ok_or_else(|| format!("Unknown template: {}", template))?;
            session.set_template(template);
            Ok(Response::Ok)
        }
        Command::SetColorScheme { color_scheme } => {
            session.set_color_scheme(ColorScheme::parse(&color_scheme));
            Ok(Response::Ok)
        }
        Command::SetLocale { locale } => {
            let locale = DisplayLocale::parse(&locale).ok_or_else(|| format!("Unknown locale: {}", locale))?;
            session.set_locale(locale);
            Ok(Response::Ok)
        }
        Command::Resize { width } => {
            session.resize(width);
            Ok(Response::Ok)
        }
        Command::GetEditor => {
            let editor = session.editor();
            Ok(Response::Editor {
                title: editor.title(),
                tabs: editor.tabs(),
                panel: editor.panel(&session.store().snapshot()),
                export_label: editor.export_label(),
                export_enabled: editor.export_enabled(),
            })
        }
        Command::GetPreview => Ok(Response::Preview {
            document: session.preview().document().clone(),
        }),
        Command::GetState => Ok(Response::State {
            data: session.store().snapshot(),
            version: session.store().version(),
        }),
        Command::Export => Err("Export is handled by the session loop".to_string()),
    }
}

fn editor_response(outcome: EditorOutcome) -> Response {
    match outcome {
        EditorOutcome::Dispatched | EditorOutcome::TabChanged => Response::Ok,
        EditorOutcome::Ignored => Response::Ignored,
        EditorOutcome::ExportRequested => Response::ExportStarted,
        EditorOutcome::ExportBlocked => Response::export_finished(&ExportOutcome::Busy),
    }
}
