//! Editor View - Tabbed form bound to the store
//!
//! This crate provides:
//! - Four mutually exclusive tabs selected by the host
//! - Per-panel field view models (label, placeholder, input kind, value)
//! - Translation of input events into store actions
//! - The skill level range control

mod error;
mod event;
mod field;
mod panel;
mod range;
mod tab;
mod view;

pub use error::*;
pub use event::*;
pub use field::*;
pub use panel::*;
pub use range::*;
pub use tab::*;
pub use view::*;
