//! Ingredient catalog lookup configuration.

use serde::{Deserialize, Serialize};

/// Settings for the cached ingredient catalog lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Whether catalog lookups go through the in-memory cache.
    #[serde(default = "default_cache_enabled")]
    pub cache_enabled: bool,
    /// Maximum number of cached catalog entries.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    /// Time-to-live for cached entries in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_seconds: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            cache_enabled: default_cache_enabled(),
            cache_capacity: default_cache_capacity(),
            cache_ttl_seconds: default_cache_ttl(),
        }
    }
}

fn default_cache_enabled() -> bool {
    true
}

fn default_cache_capacity() -> u64 {
    10_000
}

fn default_cache_ttl() -> u64 {
    600
}
