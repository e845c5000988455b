// ABOUTME: SQLite-backed token store using SQLx
// ABOUTME: Persists hashed token records in the dev_tokens table

use async_trait::async_trait;
use sqlx::{sqlite::SqlitePoolOptions, Row, SqlitePool};
use tracing::{debug, info};

use super::{TokenRecord, TokenStore};
use crate::{StorageError, StorageResult};

pub struct SqliteTokenStore {
    pool: SqlitePool,
}

impl SqliteTokenStore {
    /// Wrap an existing pool. The schema must already be migrated.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and apply pending migrations
    pub async fn connect(database_url: &str) -> StorageResult<Self> {
        debug!("Connecting to token database: {}", database_url);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Apply the embedded schema migrations
    pub async fn migrate(&self) -> StorageResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Token database schema is up to date");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn row_to_record(row: sqlx::sqlite::SqliteRow) -> StorageResult<TokenRecord> {
        Ok(TokenRecord {
            id: row.try_get("id")?,
            hashed_token: row.try_get("hashed_token")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Pool exhaustion and shutdown mean the backend is unreachable rather than
/// that the query itself failed
fn map_sqlx_error(e: sqlx::Error) -> StorageError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            StorageError::Unavailable(e.to_string())
        }
        other => StorageError::Sqlx(other),
    }
}

#[async_trait]
impl TokenStore for SqliteTokenStore {
    async fn add(&self, record: &TokenRecord) -> StorageResult<()> {
        sqlx::query(
            "INSERT INTO dev_tokens (id, hashed_token, created_at)
             VALUES (?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.hashed_token)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                StorageError::AlreadyExists(record.id.clone())
            }
            other => map_sqlx_error(other),
        })?;

        debug!(token_id = %record.id, "Inserted token record");
        Ok(())
    }

    async fn get(&self, id: &str) -> StorageResult<Option<TokenRecord>> {
        let row = sqlx::query(
            "SELECT id, hashed_token, created_at
             FROM dev_tokens
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(Self::row_to_record).transpose()
    }

    async fn list(&self) -> StorageResult<Vec<TokenRecord>> {
        let rows = sqlx::query(
            "SELECT id, hashed_token, created_at
             FROM dev_tokens
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(Self::row_to_record).collect()
    }

    async fn delete(&self, id: &str) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM dev_tokens WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(
            token_id = %id,
            rows = result.rows_affected(),
            "Deleted token record"
        );
        Ok(())
    }
}
