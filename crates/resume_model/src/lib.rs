//! Resume Model - Profile and entry collections for the resume builder
//!
//! This crate provides the data model edited by the form store and rendered
//! by the preview: a singleton [`Profile`] plus three ordered, identifier-keyed
//! collections of experience, education, and skill entries.

mod entry_id;
mod entry;
mod error;
mod profile;
mod resume;
mod sample;
mod section;

pub use entry_id::*;
pub use entry::*;
pub use error::*;
pub use profile::*;
pub use resume::*;
pub use sample::*;
pub use section::*;
