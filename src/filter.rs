//! Orthographic-form search over the lexical units.
//!
//! [`OrthIndex`] holds case-folded per-category indices over every observed
//! orthographic form. [`FilterConfig`] describes one query: a literal, regex
//! or edit-distance search restricted by category, word class and variant
//! slot.

pub mod config;
pub mod index;

pub use config::FilterConfig;
pub use index::OrthIndex;
