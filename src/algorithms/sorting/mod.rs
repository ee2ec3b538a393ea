//! Sorting generators over `[i64]`
//!
//! Every sort finishes with a single `sorted` step covering the whole array, so a
//! front end can settle the final frame without knowing which algorithm ran.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::{partition, quick_sort};
pub use selection::selection_sort;

use crate::step::Recorder;
use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Heap => "Heap Sort",
        }
    }

    /// Sort `data` in place, reporting every step to `rec`
    pub fn run<R: Recorder<[i64]>>(&self, data: &mut [i64], rec: &mut R) {
        match self {
            SortAlgorithm::Bubble => bubble_sort(data, rec),
            SortAlgorithm::Selection => selection_sort(data, rec),
            SortAlgorithm::Insertion => insertion_sort(data, rec),
            SortAlgorithm::Merge => merge_sort(data, rec),
            SortAlgorithm::Quick => quick_sort(data, rec),
            SortAlgorithm::Heap => heap_sort(data, rec),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
