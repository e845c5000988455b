// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across devtoken

// Database Configuration
pub const DEVTOKEN_DATABASE_URL: &str = "DEVTOKEN_DATABASE_URL";

// Hashing Cost (Argon2id)
pub const DEVTOKEN_HASH_MEMORY_KIB: &str = "DEVTOKEN_HASH_MEMORY_KIB";
pub const DEVTOKEN_HASH_ITERATIONS: &str = "DEVTOKEN_HASH_ITERATIONS";
pub const DEVTOKEN_HASH_PARALLELISM: &str = "DEVTOKEN_HASH_PARALLELISM";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";

/// Default SQLite database used by the CLI when no URL is configured
pub const DEFAULT_DATABASE_URL: &str = "sqlite://devtoken.db?mode=rwc";
