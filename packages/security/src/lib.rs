// ABOUTME: Developer access token issuance and verification for devtoken
// ABOUTME: Secret generation, one-way hashing, Base58 encoding, and the token service

pub mod config;
pub mod dev_tokens;
pub mod encoding;
pub mod error;
pub mod hashing;
pub mod secret;

// Re-export main types for convenience
pub use config::{ConfigError, TokenServiceConfig};
pub use dev_tokens::{IssuedCredential, TokenService};
pub use error::{TokenError, TokenResult};
pub use hashing::{Argon2Hasher, TokenHasher};
pub use secret::{SecretGenerator, SystemSecretGenerator, SECRET_LEN};
