//! Command implementations
//!
//! The comparison report is the single user-facing command; it composes
//! the tree comparator with the rendering of entries, tallies and
//! traversal warnings.

pub mod compare;
