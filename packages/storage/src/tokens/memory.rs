// ABOUTME: In-memory token store backed by an ordered map
// ABOUTME: Used for tests and for embedding without a database

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{TokenRecord, TokenStore};
use crate::{StorageError, StorageResult};

/// Token store that keeps records in process memory, ordered by id
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    records: RwLock<BTreeMap<String, TokenRecord>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn add(&self, record: &TokenRecord) -> StorageResult<()> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(StorageError::AlreadyExists(record.id.clone()));
        }
        records.insert(record.id.clone(), record.clone());
        debug!(token_id = %record.id, "Stored token record in memory");
        Ok(())
    }

    async fn get(&self, id: &str) -> StorageResult<Option<TokenRecord>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn list(&self) -> StorageResult<Vec<TokenRecord>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: &str) -> StorageResult<()> {
        self.records.write().await.remove(id);
        Ok(())
    }
}
