//! Graph traversal and shortest-path generators
//!
//! The graph is only read; steps point at nodes through `nodeIds` and never use
//! `positions`.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::{dijkstra, ShortestPaths};

use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum GraphAlgorithm {
    Bfs,
    Dfs,
    Dijkstra,
}

impl GraphAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            GraphAlgorithm::Bfs => "Breadth-First Search",
            GraphAlgorithm::Dfs => "Depth-First Search",
            GraphAlgorithm::Dijkstra => "Dijkstra's Algorithm",
        }
    }
}

impl fmt::Display for GraphAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
