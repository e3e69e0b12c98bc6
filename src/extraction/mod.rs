//! Pure extraction pipeline: selector resolution and field parsing.
//!
//! Nothing in this module performs I/O or fails a request on its own.
//! Selector resolution degrades to absence and parsers degrade to the
//! `"N/A"` sentinel; only the orchestrator decides when absence is fatal.

pub mod parsers;
pub mod selectors;

pub use selectors::{Field, SelectorConfig, SelectorConfigError, SelectorSettings};
