//! Simulation configuration parameters.

use serde::{Deserialize, Serialize};

/// Default number of trials per worker chunk in parallel runs.
pub const DEFAULT_CHUNK_SIZE: u64 = 16_384;

/// Configuration for one comparison run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Trials per strategy.
    pub trials: u64,

    /// Random seed. `None` draws a seed from OS entropy.
    /// Same seed produces identical results.
    pub seed: Option<u64>,

    /// Split trials across the rayon thread pool.
    pub parallel: bool,

    /// Trials per worker chunk when `parallel` is set.
    /// Results for a given seed depend on the chunk size, not the thread count.
    pub chunk_size: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: 1_000,
            seed: None,
            parallel: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl SimulationConfig {
    /// Create a config for the given number of trials.
    pub fn new(trials: u64) -> Self {
        Self {
            trials,
            ..Self::default()
        }
    }

    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable parallel execution.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the worker chunk size. Zero is treated as one.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.trials, 1_000);
        assert_eq!(config.seed, None);
        assert!(!config.parallel);
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SimulationConfig::new(500)
            .with_seed(123)
            .with_parallel(true)
            .with_chunk_size(0);

        assert_eq!(config.trials, 500);
        assert_eq!(config.seed, Some(123));
        assert!(config.parallel);
        assert_eq!(config.chunk_size, 1);
    }

    #[test]
    fn test_serialization() {
        let config = SimulationConfig::new(10).with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
