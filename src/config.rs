//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;

/// Default number of values a cache holds when nothing is configured.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Environment variable read by [`CacheConfig::from_env`].
pub const CAPACITY_ENV_VAR: &str = "RECENCY_CACHE_CAPACITY";

/// Cache configuration parameters.
///
/// Values can be configured via environment variables with sensible defaults.
/// Validation happens when a cache is built from the config, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of distinct values the cache can hold
    pub capacity: usize,
}

impl CacheConfig {
    /// Creates a config with an explicit capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `RECENCY_CACHE_CAPACITY` - Maximum resident values (default: 1000)
    pub fn from_env() -> Self {
        Self {
            capacity: env::var(CAPACITY_ENV_VAR)
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_CAPACITY),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
