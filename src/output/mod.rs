//! Output rendering backends.
//!
//! - [`terminal`] - textual report for interactive and one-shot use
//! - [`json`] - machine-readable rendering

pub mod json;
pub mod terminal;
