//! Error types for the export pipeline

use crate::pdf::PdfError;
use thiserror::Error;

/// Errors raised inside the export pipeline
#[derive(Debug, Error)]
pub enum ExportError {
    /// The off-screen staging area could not be used
    #[error("Staging error: {0}")]
    Staging(String),

    /// The raster collaborator failed
    #[error("Capture failed: {0}")]
    Capture(String),

    /// The captured bitmap is unusable
    #[error("Raster error: {0}")]
    Raster(String),

    /// PDF assembly error
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
