//! Export - Preview page to downloaded PDF
//!
//! The pipeline mirrors what a browser does with a rendered element:
//! 1. stage an off-screen, fixed-size copy of the page without on-screen chrome
//! 2. rasterize the copy at a fixed pixel density
//! 3. discard the copy
//! 4. embed the raster full-bleed in a single A4 page
//! 5. save the document under a name derived from the profile
//!
//! Failures are logged and reported as [`ExportOutcome::Failed`]; they never
//! propagate to the caller.

pub mod pdf;
pub mod raster;

mod download;
mod error;
mod pipeline;
mod settings;
mod staging;

pub use download::*;
pub use error::*;
pub use pipeline::*;
pub use settings::*;
pub use staging::*;
