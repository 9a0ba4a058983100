//! Error types for parsing externally supplied keys

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown section: {0:?}")]
    UnknownSection(String),

    #[error("Unknown field {field:?} for section {section}")]
    UnknownField { section: String, field: String },

    #[error("Value type does not match field {0}")]
    ValueMismatch(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
