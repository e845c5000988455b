// ABOUTME: Token service configuration
// ABOUTME: Argon2id cost parameters with environment variable overrides

use std::env;

use devtoken_config::{
    DEVTOKEN_HASH_ITERATIONS, DEVTOKEN_HASH_MEMORY_KIB, DEVTOKEN_HASH_PARALLELISM,
};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("Invalid Argon2 parameters: {0}")]
    InvalidHashParams(String),
}

/// Cost parameters for token hashing.
///
/// Higher costs slow issuance and verification but make brute-forcing a
/// leaked digest more expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenServiceConfig {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism (lanes)
    pub parallelism: u32,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            memory_kib: argon2::Params::DEFAULT_M_COST,
            iterations: argon2::Params::DEFAULT_T_COST,
            parallelism: argon2::Params::DEFAULT_P_COST,
        }
    }
}

impl TokenServiceConfig {
    /// Build a config from the defaults, overridden by any `DEVTOKEN_HASH_*`
    /// variables that are set
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            memory_kib: read_u32(DEVTOKEN_HASH_MEMORY_KIB, defaults.memory_kib)?,
            iterations: read_u32(DEVTOKEN_HASH_ITERATIONS, defaults.iterations)?,
            parallelism: read_u32(DEVTOKEN_HASH_PARALLELISM, defaults.parallelism)?,
        };
        config.argon2_params()?;

        debug!(
            memory_kib = config.memory_kib,
            iterations = config.iterations,
            parallelism = config.parallelism,
            "Loaded token hashing configuration"
        );
        Ok(config)
    }

    /// Validate and convert into Argon2 parameters
    pub fn argon2_params(&self) -> Result<argon2::Params, ConfigError> {
        argon2::Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| ConfigError::InvalidHashParams(e.to_string()))
    }
}

fn read_u32(var: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
        Err(_) => Ok(default),
    }
}
