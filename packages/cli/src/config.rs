use std::env;

use devtoken_config::{DEFAULT_DATABASE_URL, DEVTOKEN_DATABASE_URL};
use devtoken_security::{ConfigError as HashConfigError, TokenServiceConfig};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Database URL must not be empty")]
    EmptyDatabaseUrl,
    #[error(transparent)]
    Hashing(#[from] HashConfigError),
}

#[derive(Debug)]
pub struct Config {
    pub database_url: String,
    pub hashing: TokenServiceConfig,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// `database_override` (from the command line) wins over
    /// `DEVTOKEN_DATABASE_URL`, which wins over the default.
    pub fn from_env(database_override: Option<&str>) -> Result<Self, ConfigError> {
        let database_url = match database_override {
            Some(url) => url.to_string(),
            None => env::var(DEVTOKEN_DATABASE_URL)
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
        };

        if database_url.trim().is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }

        let hashing = TokenServiceConfig::from_env()?;

        Ok(Config {
            database_url,
            hashing,
        })
    }
}
