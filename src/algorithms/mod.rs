//! Sorting and graph algorithms
//!
//! Unlike [`crate::operations`], these run a whole algorithm over a container rather
//! than a single structure operation.

pub mod graph;
pub mod sorting;

pub use graph::GraphAlgorithm;
pub use sorting::SortAlgorithm;
