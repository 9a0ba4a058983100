//! Error types for editor input handling

use resume_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EditorError {
    #[error("Not a number: {0:?}")]
    NotANumber(String),

    #[error("Unknown editor tab: {0}")]
    UnknownTab(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, EditorError>;
