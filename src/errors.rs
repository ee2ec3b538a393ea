//! Error types for the driver layer
//!
//! Generators never fail: a guard violation is reported as a rejected step. These
//! errors cover everything around them (user input, the snapshot budget, I/O).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed command-line or data input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Snapshot history outgrew its budget
    #[error("Snapshot memory limit exceeded: {current} > {limit}")]
    SnapshotLimitExceeded { current: usize, limit: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
