// ABOUTME: Type definitions for developer access tokens
// ABOUTME: The one-time credential returned to callers at issuance

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use zeroize::Zeroize;

/// Token issuance result - includes the encoded plaintext secret.
/// This is the ONLY time the plaintext token is available.
#[derive(Clone, Serialize)]
pub struct IssuedCredential {
    pub id: String,
    pub plaintext_token: String,
    pub created_at: DateTime<Utc>,
}

impl IssuedCredential {
    pub fn new(id: String, plaintext_token: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            plaintext_token,
            created_at,
        }
    }
}

impl fmt::Debug for IssuedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedCredential")
            .field("id", &self.id)
            .field("plaintext_token", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl Drop for IssuedCredential {
    fn drop(&mut self) {
        self.plaintext_token.zeroize();
    }
}
