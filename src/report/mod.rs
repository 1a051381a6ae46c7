//! Summary report module
//!
//! Computes per-direction statistics from categorized lines and renders
//! the human-readable summary.

pub mod stats;
pub mod summary;

pub use stats::Summary;
pub use summary::{DirectionReport, RunReport};
