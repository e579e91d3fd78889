//! Configuration types for an evolution run.

use serde::{Deserialize, Serialize};

fn default_max_pool_size() -> usize {
    12
}

fn default_generations() -> usize {
    50
}

fn default_seed_count() -> usize {
    20
}

/// Top-level evolution configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Carrying capacity of the attribute pool after each generation.
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: usize,
    /// Number of generation steps to run.
    #[serde(default = "default_generations")]
    pub generations: usize,
    /// Number of mutations of the baseline attribute used to seed the pool.
    /// Duplicates collapse, so the realized initial pool may be smaller.
    #[serde(default = "default_seed_count")]
    pub seed_count: usize,
    /// Seed for the run's random source. `None` draws from entropy.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            max_pool_size: default_max_pool_size(),
            generations: default_generations(),
            seed_count: default_seed_count(),
            random_seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_pool_size == 0 {
            return Err(ConfigError::InvalidPoolSize);
        }
        if self.seed_count == 0 {
            return Err(ConfigError::InvalidSeedCount);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Pool capacity must be non-zero")]
    InvalidPoolSize,
    #[error("Seed count must be non-zero")]
    InvalidSeedCount,
}
