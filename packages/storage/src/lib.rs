// ABOUTME: Data layer and persistence for devtoken
// ABOUTME: Token record type, store trait, and in-memory and SQLite backends

pub mod error;
pub mod tokens;

// Re-export main types
pub use error::{StorageError, StorageResult};
pub use tokens::memory::MemoryTokenStore;
pub use tokens::sqlite::SqliteTokenStore;
pub use tokens::{TokenRecord, TokenStore};
