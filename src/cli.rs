//! Command-line interface

use crate::algorithms::{GraphAlgorithm, SortAlgorithm};
use crate::config::{Config, DEFAULT_SNAPSHOT_LIMIT};
use crate::data::{parse_number_list, ArrayShape};
use crate::errors::{Error, Result};
use crate::operations::binary_tree::TraversalOrder;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "algotrace",
    version,
    about = "Step through algorithms and data structure operations in the terminal"
)]
pub struct Cli {
    /// Comma-separated values to seed the structure with (e.g. "5,3,8")
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub data: Option<String>,

    /// Number of generated values
    #[arg(long, global = true, default_value_t = 12)]
    pub size: usize,

    /// Smallest generated value
    #[arg(long, global = true, default_value_t = 5, allow_negative_numbers = true)]
    pub min: i64,

    /// Largest generated value
    #[arg(long, global = true, default_value_t = 100, allow_negative_numbers = true)]
    pub max: i64,

    /// Seed for generated data
    #[arg(long, global = true, default_value_t = 42)]
    pub seed: u64,

    /// Playback speed multiplier
    #[arg(long, global = true, default_value_t = 1.0)]
    pub speed: f64,

    /// Hash table capacity
    #[arg(long, global = true, default_value_t = 11)]
    pub capacity: usize,

    /// Maximum stack or queue length
    #[arg(long, global = true)]
    pub bound: Option<usize>,

    /// Memory budget for captured snapshots, in bytes
    #[arg(long, global = true, default_value_t = DEFAULT_SNAPSHOT_LIMIT)]
    pub snapshot_limit: usize,

    /// Print the steps as JSON instead of opening the viewer
    #[arg(long, global = true)]
    pub json: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Split into the resolved settings and the operation to run
    pub fn into_parts(self) -> Result<(Config, Command)> {
        if self.size == 0 && self.data.is_none() {
            return Err(Error::InvalidInput("--size must be at least 1".into()));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(Error::InvalidInput(format!(
                "--speed must be a positive number, got {}",
                self.speed
            )));
        }
        if self.capacity == 0 {
            return Err(Error::InvalidInput("--capacity must be at least 1".into()));
        }

        let data = self.data.as_deref().map(parse_number_list).transpose()?;
        let config = Config {
            data,
            size: self.size,
            min: self.min,
            max: self.max,
            seed: self.seed,
            speed: self.speed,
            capacity: self.capacity,
            bound: self.bound,
            snapshot_limit: self.snapshot_limit,
        };
        Ok((config, self.command))
    }
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Run a sorting algorithm
    Sort {
        #[arg(value_enum)]
        algorithm: SortAlgorithm,
        /// Shape of the generated array
        #[arg(long, value_enum, default_value_t = ArrayShape::Random)]
        shape: ArrayShape,
    },
    /// Array operations
    Array {
        #[command(subcommand)]
        op: ArrayOp,
    },
    /// Stack operations (top is the last value)
    Stack {
        #[command(subcommand)]
        op: StackOp,
    },
    /// Queue operations (front is the first value)
    Queue {
        #[command(subcommand)]
        op: QueueOp,
    },
    /// Singly linked list operations
    List {
        #[command(subcommand)]
        op: ListOp,
    },
    /// Binary tree filled in level order
    Tree {
        #[command(subcommand)]
        op: TreeOp,
    },
    /// Binary search tree operations
    Bst {
        #[command(subcommand)]
        op: BstOp,
    },
    /// Min-heap operations
    Heap {
        #[command(subcommand)]
        op: HeapOp,
    },
    /// Hash table with linear probing
    Hash {
        #[command(subcommand)]
        op: HashOp,
    },
    /// Traverse or search the demo grid graph
    Graph {
        #[arg(value_enum)]
        algorithm: GraphAlgorithm,
        /// Start node
        #[arg(long, default_value = "0")]
        start: String,
        /// Target node (Dijkstra only)
        #[arg(long)]
        target: Option<String>,
        #[arg(long)]
        directed: bool,
        #[arg(long)]
        weighted: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum ArrayOp {
    Insert {
        index: usize,
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    Delete {
        index: usize,
    },
    Search {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    Access {
        index: usize,
    },
    Update {
        index: usize,
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum StackOp {
    Push {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    Pop,
    Peek,
    Search {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    IsEmpty,
    Size,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum QueueOp {
    Enqueue {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    Dequeue,
    Peek,
    Rear,
    Search {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    IsEmpty,
    Size,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum ListOp {
    InsertHead {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    InsertTail {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    InsertAt {
        #[arg(allow_negative_numbers = true)]
        value: i64,
        position: usize,
    },
    DeleteHead,
    DeleteTail,
    DeleteAt {
        position: usize,
    },
    Search {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    IsEmpty,
    Size,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum TreeOp {
    Insert {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    Search {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    Traverse {
        #[arg(value_enum)]
        order: TraversalOrder,
    },
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum BstOp {
    Insert {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    Search {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    Min,
    Max,
    Validate,
    Traverse {
        #[arg(value_enum)]
        order: TraversalOrder,
    },
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum HeapOp {
    Insert {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    ExtractMin,
    /// Build a heap from the raw seed values
    Heapify,
    Peek,
    Size,
    IsEmpty,
    /// Sort the heap array ascending
    Sort,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum HashOp {
    Insert {
        #[arg(allow_negative_numbers = true)]
        key: i64,
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    Search {
        #[arg(allow_negative_numbers = true)]
        key: i64,
    },
    Delete {
        #[arg(allow_negative_numbers = true)]
        key: i64,
    },
    Keys,
    LoadFactor,
    Clear,
    /// Collision statistics
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sort_with_data() {
        let cli = Cli::try_parse_from(["algotrace", "--data", "5, 2,8", "sort", "quick"]).unwrap();
        let (config, command) = cli.into_parts().unwrap();
        assert_eq!(config.data, Some(vec![5, 2, 8]));
        assert_eq!(
            command,
            Command::Sort {
                algorithm: SortAlgorithm::Quick,
                shape: ArrayShape::Random,
            }
        );
    }

    #[test]
    fn test_nested_operation_and_negative_value() {
        let cli = Cli::try_parse_from(["algotrace", "stack", "push", "-4", "--bound", "3"]).unwrap();
        let (config, command) = cli.into_parts().unwrap();
        assert_eq!(config.bound, Some(3));
        assert_eq!(
            command,
            Command::Stack {
                op: StackOp::Push { value: -4 }
            }
        );
    }

    #[test]
    fn test_bad_data_is_invalid_input() {
        let cli = Cli::try_parse_from(["algotrace", "--data", "1,x", "heap", "peek"]).unwrap();
        assert!(matches!(cli.into_parts(), Err(Error::InvalidInput(_))));
    }
}
