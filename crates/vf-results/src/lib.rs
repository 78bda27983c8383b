//! vf-results: serializable calculation result snapshots.
//!
//! All quantities are plain f64 with unit-suffixed field names; presentation
//! collaborators (reports, summaries, file persistence) consume these types
//! and never recompute physics.

pub mod types;

pub use types::*;
