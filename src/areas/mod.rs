//! Core comparison session components
//!
//! This module contains the building blocks of a comparison run:
//!
//! - `comparison`: High-level comparison session and root validation
//! - `workspace`: File system access for one side of the comparison

pub mod comparison;
pub mod workspace;
