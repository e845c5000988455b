// ABOUTME: Token record definition and the persistence trait
// ABOUTME: Stores are keyed by token id and only ever see hashed secrets

pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::StorageResult;

/// Developer token as persisted. Holds the encoded hash, never the secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub id: String,
    pub hashed_token: String,
    pub created_at: DateTime<Utc>,
}

impl TokenRecord {
    pub fn new(id: String, hashed_token: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            hashed_token,
            created_at,
        }
    }
}

/// Persistence backend for token records.
///
/// Records are written once and never mutated, so implementations only need
/// per-key atomicity: a record is either fully visible or absent.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Insert a new record. Fails with `AlreadyExists` if the id is taken.
    async fn add(&self, record: &TokenRecord) -> StorageResult<()>;

    /// Fetch a record by id
    async fn get(&self, id: &str) -> StorageResult<Option<TokenRecord>>;

    /// All records in store-defined order
    async fn list(&self) -> StorageResult<Vec<TokenRecord>>;

    /// Delete a record. Deleting an absent id succeeds.
    async fn delete(&self, id: &str) -> StorageResult<()>;
}
