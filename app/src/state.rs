//! Session state: one store, one editor, one preview, one export pipeline

use editor_view::{EditorEvent, EditorOutcome, EditorView};
use export::raster::SoftwareRasterizer;
use export::{AppSettings, ExportOutcome, ExportPipeline, FileDownloadSink};
use form_store::FormStore;
use preview::{ColorScheme, DisplayLocale, PreviewDocument, PreviewView, Template};
use resume_model::ResumeData;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinError;

type Pipeline = ExportPipeline<SoftwareRasterizer, FileDownloadSink>;

/// Everything needed to run one export away from the session
pub struct ExportJob {
    pipeline: Arc<Pipeline>,
    document: PreviewDocument,
    full_name: String,
}

impl ExportJob {
    pub async fn run(self) -> ExportOutcome {
        self.pipeline.export(&self.document, &self.full_name).await
    }
}

pub struct Session {
    store: FormStore,
    changes: watch::Receiver<ResumeData>,
    editor: EditorView,
    preview: PreviewView,
    pipeline: Arc<Pipeline>,
}

impl Session {
    pub fn new(settings: &AppSettings) -> Self {
        Self::with_data(settings, FormStore::with_sample())
    }

    pub fn with_data(settings: &AppSettings, store: FormStore) -> Self {
        let display = &settings.display;
        let changes = store.subscribe();
        let preview = PreviewView::mount(
            store.snapshot(),
            display.template(),
            display.color_scheme(),
            display.locale(),
        );
        let editor = EditorView::new(display.locale(), display.color_scheme());
        let pipeline = ExportPipeline::new(
            SoftwareRasterizer::from_settings(&settings.export),
            FileDownloadSink::new(settings.export.download_dir()),
            settings.export.clone(),
        );

        tracing::info!(
            "Session started ({} template, {} scheme)",
            settings.display.template().key(),
            settings.display.color_scheme().key()
        );
        Self {
            store,
            changes,
            editor,
            preview,
            pipeline: Arc::new(pipeline),
        }
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn editor(&self) -> &EditorView {
        &self.editor
    }

    pub fn preview(&self) -> &PreviewView {
        &self.preview
    }

    /// Route an editor event, then bring the preview up to date
    pub fn handle(&mut self, event: EditorEvent) -> EditorOutcome {
        let outcome = self.editor.handle(event, &mut self.store);
        self.sync_preview();
        outcome
    }

    fn sync_preview(&mut self) {
        if self.changes.has_changed().unwrap_or(false) {
            let data = self.changes.borrow_and_update().clone();
            self.preview.update(data);
        }
    }

    pub fn set_template(&mut self, template: Template) {
        self.preview.set_template(template);
    }

    /// The scheme tints both the preview and the editor's tab strip
    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.preview.set_color_scheme(scheme);
        self.editor.set_color_scheme(scheme);
    }

    pub fn set_locale(&mut self, locale: DisplayLocale) {
        self.preview.set_locale(locale);
        self.editor.set_locale(locale);
    }

    pub fn resize(&mut self, viewport_width: f64) {
        self.preview.resize(viewport_width);
    }

    /// Start an export if none is pending. The download button stays
    /// disabled until [`Session::finish_export`] is called.
    pub fn begin_export(&mut self) -> Option<ExportJob> {
        match self.handle(EditorEvent::ExportRequested) {
            EditorOutcome::ExportRequested => {
                self.editor.set_export_pending(true);
                Some(ExportJob {
                    pipeline: Arc::clone(&self.pipeline),
                    document: self.preview.document().clone(),
                    full_name: self.store.snapshot().profile.full_name.clone(),
                })
            }
            _ => None,
        }
    }

    pub fn finish_export(&mut self, outcome: &ExportOutcome) {
        self.editor.set_export_pending(false);
        tracing::debug!("Export finished: {:?}", outcome);
    }

    /// Settle a background export task. A task that panicked or was
    /// cancelled counts as a failed export so the button comes back.
    pub fn finish_joined(&mut self, joined: Result<ExportOutcome, JoinError>) -> ExportOutcome {
        let outcome = joined.unwrap_or_else(|e| {
            tracing::error!("Export task did not complete: {}", e);
            ExportOutcome::Failed
        });
        self.finish_export(&outcome);
        outcome
    }

    /// Run an export to completion
    pub async fn export(&mut self) -> ExportOutcome {
        let Some(job) = self.begin_export() else {
            return ExportOutcome::Busy;
        };
        let outcome = job.run().await;
        self.finish_export(&outcome);
        outcome
    }
}
