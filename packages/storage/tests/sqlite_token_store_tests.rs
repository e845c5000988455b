// ABOUTME: Integration tests for the SQLite token store
// ABOUTME: Covers insert, lookup, ordering, duplicate ids, deletion, and persistence on disk

use chrono::{TimeZone, Utc};
use devtoken_storage::{SqliteTokenStore, StorageError, TokenRecord, TokenStore};
use pretty_assertions::assert_eq;
use sqlx::sqlite::SqlitePoolOptions;
use tempfile::TempDir;

async fn setup_store() -> SqliteTokenStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    let store = SqliteTokenStore::new(pool);
    store.migrate().await.unwrap();
    store
}

fn record(id: &str, secs: i64) -> TokenRecord {
    TokenRecord::new(
        id.to_string(),
        format!("hashed-{}", id),
        Utc.timestamp_opt(secs, 0).unwrap(),
    )
}

#[tokio::test]
async fn test_add_then_get_returns_same_record() {
    let store = setup_store().await;
    let rec = record("0190a1b2-0000-7000-8000-000000000001", 1_700_000_000);

    store.add(&rec).await.unwrap();

    let fetched = store.get(&rec.id).await.unwrap();
    assert_eq!(fetched, Some(rec));
}

#[tokio::test]
async fn test_get_missing_returns_none() {
    let store = setup_store().await;

    assert_eq!(store.get("does-not-exist").await.unwrap(), None);
}

#[tokio::test]
async fn test_duplicate_id_is_rejected() {
    let store = setup_store().await;
    let rec = record("dup-id", 1_700_000_000);
    store.add(&rec).await.unwrap();

    let result = store.add(&record("dup-id", 1_700_000_500)).await;

    match result {
        Err(StorageError::AlreadyExists(id)) => assert_eq!(id, "dup-id"),
        other => panic!("Expected AlreadyExists, got {:?}", other),
    }

    // Original record is untouched
    assert_eq!(store.get("dup-id").await.unwrap(), Some(rec));
}

#[tokio::test]
async fn test_list_returns_records_ordered_by_id() {
    let store = setup_store().await;
    store.add(&record("b", 2)).await.unwrap();
    store.add(&record("c", 3)).await.unwrap();
    store.add(&record("a", 1)).await.unwrap();

    let ids: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();

    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let store = setup_store().await;
    store.add(&record("to-remove", 1)).await.unwrap();

    store.delete("to-remove").await.unwrap();
    store.delete("to-remove").await.unwrap();
    store.delete("never-existed").await.unwrap();

    assert_eq!(store.get("to-remove").await.unwrap(), None);
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_records_survive_reconnect() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("tokens.db");
    let database_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let rec = record("persisted", 1_700_000_000);

    {
        let store = SqliteTokenStore::connect(&database_url).await.unwrap();
        store.add(&rec).await.unwrap();
        store.pool().close().await;
    }

    let store = SqliteTokenStore::connect(&database_url).await.unwrap();
    assert_eq!(store.get("persisted").await.unwrap(), Some(rec));
}

#[tokio::test]
async fn test_closed_pool_reports_unavailable() {
    let store = setup_store().await;
    store.pool().close().await;

    assert!(matches!(
        store.get("any").await,
        Err(StorageError::Unavailable(_))
    ));
    assert!(matches!(
        store.add(&record("any", 1)).await,
        Err(StorageError::Unavailable(_))
    ));
    assert!(matches!(store.list().await, Err(StorageError::Unavailable(_))));
    assert!(matches!(
        store.delete("any").await,
        Err(StorageError::Unavailable(_))
    ));
}
