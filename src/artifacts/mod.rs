//! Comparison data structures and algorithms
//!
//! - `diff`: Tree comparison and diff classification
//! - `report`: Aggregation of a finished comparison for display

pub mod diff;
pub mod report;
