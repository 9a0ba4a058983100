//! Resume builder application
//!
//! Wires the form store, editor, preview, and export pipeline into one
//! [`Session`] and exposes it through a string-keyed command surface.

mod commands;
mod state;

pub use commands::{execute, Command, Response};
pub use state::{ExportJob, Session};
