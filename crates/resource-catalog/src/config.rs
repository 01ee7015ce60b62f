//! Runtime configuration, read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `CATALOG_CHANNEL_CAPACITY` | `32` | Request buffer of the resource actor |
//! | `CATALOG_SEED_PATH` | unset | JSON file of resources loaded at startup |

use std::path::PathBuf;
use thiserror::Error;

pub const CHANNEL_CAPACITY_VAR: &str = "CATALOG_CHANNEL_CAPACITY";
pub const SEED_PATH_VAR: &str = "CATALOG_SEED_PATH";

const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Errors raised while loading configuration or seed data.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("cannot read seed file {path}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed seed file {path}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Capacity of the actor's request channel. Always at least 1.
    pub channel_capacity: usize,
    /// Seed file to load instead of the built-in resources.
    pub seed_path: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            seed_path: None,
        }
    }
}

impl CatalogConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = match raw.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidValue {
                        key: CHANNEL_CAPACITY_VAR,
                        value: raw,
                        reason: "must be at least 1",
                    })
                }
                Ok(capacity) => capacity,
                Err(_) => {
                    return Err(ConfigError::InvalidValue {
                        key: CHANNEL_CAPACITY_VAR,
                        value: raw,
                        reason: "not a positive integer",
                    })
                }
            };
        }

        config.seed_path = lookup(SEED_PATH_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}
