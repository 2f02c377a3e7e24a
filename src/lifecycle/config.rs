//! Process configuration, read from the environment.
//!
//! | Variable | Default | |
//! |---|---|---|
//! | `CATALOG_ADDR` | `0.0.0.0:3000` | socket address to bind |
//! | `CATALOG_CHANNEL_CAPACITY` | `32` | store request channel capacity, > 0 |
//!
//! `main` loads a `.env` file with `dotenvy` first, so either source works.

use std::net::SocketAddr;
use thiserror::Error;

pub const ADDR_VAR: &str = "CATALOG_ADDR";
pub const CHANNEL_CAPACITY_VAR: &str = "CATALOG_CHANNEL_CAPACITY";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub channel_capacity: usize,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid {key} {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            channel_capacity: 32,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unset keys fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    key: ADDR_VAR,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = match value.parse::<usize>() {
                Ok(0) => Err("must be greater than zero".to_string()),
                Ok(capacity) => Ok(capacity),
                Err(e) => Err(e.to_string()),
            }
            .map_err(|reason| ConfigError::Invalid {
                key: CHANNEL_CAPACITY_VAR,
                value: value.clone(),
                reason,
            })?;
        }

        Ok(config)
    }
}
