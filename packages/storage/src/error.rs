// ABOUTME: Error types for token persistence
// ABOUTME: Wraps database and migration failures and duplicate-key writes

use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Token already exists: {0}")]
    AlreadyExists(String),

    /// The backend cannot be reached (closed or exhausted pool, or an
    /// external store that is offline)
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}
