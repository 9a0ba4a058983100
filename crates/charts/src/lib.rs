//! Charts - Proficiency radar chart for the minimal template
//!
//! This crate provides:
//! - A strongly-typed radar chart model (one axis per indicator)
//! - Layout calculation for axes, split rings, and series polygons
//! - Rendering to primitives or SVG
//! - [`ChartSurface`], a disposable render target with explicit resize

mod model;
mod error;
mod layout;
mod render;
mod surface;

pub use model::*;
pub use error::*;
pub use layout::*;
pub use render::*;
pub use surface::*;
