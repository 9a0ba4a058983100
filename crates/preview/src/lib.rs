//! Preview - Resume data to rendered page
//!
//! This crate turns the form state into a [`PreviewDocument`]: a page of
//! positioned render items laid out by one of three templates and tinted
//! by a color scheme. [`PreviewView`] keeps the document in sync with the
//! store and owns the skill chart surface of the minimal template.

mod error;
mod format;
mod locale;
mod render_item;
mod style;
mod templates;
mod text;
mod view;

pub use error::*;
pub use format::*;
pub use locale::*;
pub use render_item::*;
pub use style::*;
pub use templates::*;
pub use text::*;
pub use view::*;
