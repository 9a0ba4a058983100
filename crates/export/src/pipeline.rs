//! Single-flight export pipeline

use crate::download::{export_file_name, DownloadSink};
use crate::pdf::{DocumentInfo, ImagePageWriter, ImageXObject};
use crate::raster::RasterCapture;
use crate::settings::ExportSettings;
use crate::staging::StagingArea;
use crate::Result;
use preview::PreviewDocument;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// How an export request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The document was saved at `path`
    Saved { path: PathBuf },
    /// Something failed; the error has been logged
    Failed,
    /// Another export was still running, nothing was done
    Busy,
}

impl ExportOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, ExportOutcome::Saved { .. })
    }
}

/// Clears the in-flight flag on every exit path
struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs preview-to-file exports, at most one at a time
pub struct ExportPipeline<C, S> {
    capture: C,
    sink: S,
    settings: ExportSettings,
    staging: StagingArea,
    in_flight: AtomicBool,
}

impl<C: RasterCapture, S: DownloadSink> ExportPipeline<C, S> {
    pub fn new(capture: C, sink: S, settings: ExportSettings) -> Self {
        Self {
            capture,
            sink,
            settings,
            staging: StagingArea::new(),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Whether an export is running; the trigger should be disabled meanwhile
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Export `document` under a name derived from `full_name`.
    ///
    /// A request made while another is running is refused with
    /// [`ExportOutcome::Busy`]. Errors are logged, never returned.
    pub async fn export(&self, document: &PreviewDocument, full_name: &str) -> ExportOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::info!("Export already in progress, request ignored");
            return ExportOutcome::Busy;
        }
        let _flight = FlightGuard(&self.in_flight);

        tracing::info!("Export started");
        match self.run(document, full_name).await {
            Ok(path) => ExportOutcome::Saved { path },
            Err(e) => {
                tracing::error!("Error generating PDF: {}", e);
                ExportOutcome::Failed
            }
        }
    }

    async fn run(&self, document: &PreviewDocument, full_name: &str) -> Result<PathBuf> {
        let options = self.settings.capture_options();
        let raster = {
            let staged = self.staging.stage(document, &self.settings)?;
            self.capture.capture(&staged, &options).await?
        };
        tracing::debug!("Captured {}x{} raster", raster.width, raster.height);

        let file_name = export_file_name(full_name, &self.settings.fallback_file_name);
        let image = ImageXObject::from_rgb(raster.width, raster.height, raster.pixels)?;
        let bytes = ImagePageWriter::new(self.settings.page, DocumentInfo::new(file_name.trim_end_matches(".pdf")))
            .with_compression(self.settings.compress)
            .to_bytes(&image)?;

        self.sink.save(&file_name, bytes).await
    }
}
