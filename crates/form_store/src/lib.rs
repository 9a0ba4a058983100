//! Form Store - Single source of truth for resume data
//!
//! Mutations are expressed as [`Action`] values and applied by the pure
//! [`reduce`] function. [`FormStore`] owns the current state and publishes
//! every new state to its subscribers.

mod action;
mod collection;
mod store;

pub use action::*;
pub use store::*;
