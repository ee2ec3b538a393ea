//! Resolved run settings

/// Snapshot budget used when none is given on the command line
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 256 * 1024 * 1024;

/// Configuration for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Explicit seed values; overrides the generated data
    pub data: Option<Vec<i64>>,
    /// Length of generated arrays
    pub size: usize,
    /// Smallest generated value
    pub min: i64,
    /// Largest generated value
    pub max: i64,
    /// Seed for deterministic data generation
    pub seed: u64,
    /// Playback speed multiplier (1.0 = one step per second)
    pub speed: f64,
    /// Hash table capacity
    pub capacity: usize,
    /// Maximum stack/queue length, unlimited when `None`
    pub bound: Option<usize>,
    /// Memory budget for captured snapshots, in bytes
    pub snapshot_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: None,
            size: 12,
            min: 5,
            max: 100,
            seed: 42,
            speed: 1.0,
            capacity: 11,
            bound: None,
            snapshot_limit: DEFAULT_SNAPSHOT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.size, 12);
        assert_eq!((config.min, config.max), (5, 100));
        assert_eq!(config.capacity, 11);
        assert_eq!(config.bound, None);
        assert_eq!(config.snapshot_limit, 268_435_456);
    }
}
