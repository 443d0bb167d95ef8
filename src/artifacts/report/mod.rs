//! Aggregation of a finished comparison for display
//!
//! - `summary`: Per-kind tallies over a comparison result

pub mod summary;
