// ABOUTME: Developer token service over an injected token store
// ABOUTME: Issues Base58 secrets, stores Argon2id digests, and verifies in constant time

use std::sync::Arc;

use chrono::Utc;
use devtoken_storage::{TokenRecord, TokenStore};
use subtle::Choice;
use tracing::{debug, info, warn};
use uuid::Uuid;
use zeroize::Zeroizing;

use super::types::IssuedCredential;
use crate::config::TokenServiceConfig;
use crate::encoding;
use crate::error::{TokenError, TokenResult};
use crate::hashing::{Argon2Hasher, TokenHasher};
use crate::secret::{SecretGenerator, SystemSecretGenerator, SECRET_LEN};

/// Issues, lists, verifies, and removes developer access tokens.
///
/// Holds no mutable state; it is safe to share behind an `Arc` and call
/// from many tasks at once.
pub struct TokenService {
    store: Arc<dyn TokenStore>,
    hasher: Arc<dyn TokenHasher>,
    generator: Arc<dyn SecretGenerator>,
    // Digest of a random, discarded secret. Verifying against it on an id
    // miss keeps misses as expensive as mismatches.
    decoy_digest: Arc<Vec<u8>>,
    // Longest Base58 text a SECRET_LEN secret can encode to
    max_token_len: usize,
}

impl TokenService {
    /// Create a service using Argon2id with `config` and the system RNG
    pub fn new(store: Arc<dyn TokenStore>, config: TokenServiceConfig) -> TokenResult<Self> {
        let hasher = Argon2Hasher::new(&config)?;
        Self::with_components(
            store,
            Arc::new(hasher),
            Arc::new(SystemSecretGenerator::new()),
        )
    }

    pub fn with_components(
        store: Arc<dyn TokenStore>,
        hasher: Arc<dyn TokenHasher>,
        generator: Arc<dyn SecretGenerator>,
    ) -> TokenResult<Self> {
        let mut decoy_secret = Zeroizing::new([0u8; SECRET_LEN]);
        generator.fill(&mut decoy_secret[..])?;
        let decoy_digest = hasher.hash(&decoy_secret[..])?;

        Ok(Self {
            store,
            hasher,
            generator,
            decoy_digest: Arc::new(decoy_digest),
            max_token_len: encoding::max_encoded_len(SECRET_LEN),
        })
    }

    /// Issue a new token.
    ///
    /// The returned credential is the only place the plaintext secret ever
    /// appears. The token counts as issued only once the store write succeeds.
    pub async fn issue_token(&self) -> TokenResult<IssuedCredential> {
        let mut secret = Zeroizing::new([0u8; SECRET_LEN]);
        self.generator.fill(&mut secret[..])?;

        let id = Uuid::now_v7().to_string();
        let created_at = Utc::now();
        let plaintext_token = encoding::encode(&secret[..]);

        let hasher = Arc::clone(&self.hasher);
        let digest = tokio::task::spawn_blocking(move || hasher.hash(&secret[..]))
            .await
            .map_err(|e| TokenError::Hashing(format!("Hashing task failed: {}", e)))??;

        let record = TokenRecord::new(id.clone(), encoding::encode(&digest), created_at);
        self.store.add(&record).await?;

        info!(token_id = %id, "Issued developer token");
        Ok(IssuedCredential::new(id, plaintext_token, created_at))
    }

    /// All stored token records. Only hashed forms are ever returned.
    pub async fn list_tokens(&self) -> TokenResult<Vec<TokenRecord>> {
        let records = self.store.list().await?;
        debug!(count = records.len(), "Listed developer tokens");
        Ok(records)
    }

    /// Fetch a single stored token record by id
    pub async fn get_token(&self, id: &str) -> TokenResult<Option<TokenRecord>> {
        Ok(self.store.get(id).await?)
    }

    /// Check a presented token against the record stored under `id`.
    ///
    /// Returns `Ok(false)` both for an unknown id and for a wrong secret;
    /// the two cases take the same path so neither the result nor the cost
    /// reveals which one happened. Fails with `TokenError::Encoding` only
    /// when `presented_token` is not valid Base58.
    ///
    /// Tokens longer than any issued secret can encode to are rejected before
    /// decoding or the store lookup, since Base58 decoding is quadratic in
    /// the input length.
    pub async fn verify_token(&self, id: &str, presented_token: &str) -> TokenResult<bool> {
        if presented_token.len() > self.max_token_len {
            if !encoding::is_base58(presented_token) {
                return Err(TokenError::Encoding(
                    "Token contains characters outside the Base58 alphabet".to_string(),
                ));
            }
            debug!(
                length = presented_token.len(),
                "Presented token exceeds maximum length"
            );
            return Ok(false);
        }

        let presented = Zeroizing::new(encoding::decode(presented_token)?);

        let stored_digest = match self.store.get(id).await? {
            Some(record) => match encoding::decode(&record.hashed_token) {
                Ok(digest) => Some(digest),
                Err(e) => {
                    warn!(token_id = %id, error = %e, "Stored token digest is not valid Base58");
                    None
                }
            },
            None => None,
        };

        let found = Choice::from(stored_digest.is_some() as u8);
        let digest = match stored_digest {
            Some(digest) => Arc::new(digest),
            None => Arc::clone(&self.decoy_digest),
        };

        let hasher = Arc::clone(&self.hasher);
        let matched = tokio::task::spawn_blocking(move || hasher.verify(&presented[..], &digest[..]))
            .await
            .map_err(|e| TokenError::Hashing(format!("Verification task failed: {}", e)))??;

        let verified: bool = (found & Choice::from(matched as u8)).into();
        debug!(token_id = %id, verified, "Verified developer token");
        Ok(verified)
    }

    /// Remove a token. Removing an unknown id succeeds.
    pub async fn remove_token(&self, id: &str) -> TokenResult<()> {
        self.store.delete(id).await?;
        info!(token_id = %id, "Removed developer token");
        Ok(())
    }
}
