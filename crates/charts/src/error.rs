//! Error types for the charts crate

use thiserror::Error;

/// Errors that can occur when working with charts
#[derive(Error, Debug, PartialEq)]
pub enum ChartError {
    /// The surface was already disposed
    #[error("Chart surface {0} has been disposed")]
    Disposed(u64),

    /// Invalid data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Layout calculation error
    #[error("Layout error: {0}")]
    Layout(String),
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
