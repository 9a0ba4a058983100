//! Error types for preview rendering

use charts::ChartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Skill chart failed: {0}")]
    Chart(#[from] ChartError),

    #[error("Preview is not mounted")]
    NotMounted,
}

pub type Result<T> = std::result::Result<T, PreviewError>;
