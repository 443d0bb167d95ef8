//! Tree comparison and diff classification
//!
//! - `diff_entry`: Classified path differences and kind filters
//! - `inspector`: Content equality probing for paired files
//! - `tree_diff`: Recursive lock-step comparison of two trees

pub mod diff_entry;
pub mod inspector;
pub mod tree_diff;
