// ABOUTME: Error types for token issuance and verification
// ABOUTME: Separates randomness, hashing, encoding, configuration, and store failures

use devtoken_storage::StorageError;
use thiserror::Error;

use crate::config::ConfigError;

pub type TokenResult<T> = Result<T, TokenError>;

/// Failures surfaced by the token service.
///
/// A wrong secret or unknown id is not an error: verification reports it as
/// `Ok(false)`.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Failed to generate secure random data: {0}")]
    Generation(String),

    #[error("Token hashing failed: {0}")]
    Hashing(String),

    #[error("Malformed token encoding: {0}")]
    Encoding(String),

    #[error("Invalid token configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Token store error: {0}")]
    Store(#[from] StorageError),
}
