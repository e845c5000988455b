// ABOUTME: One-way hashing of token secrets
// ABOUTME: Pluggable hasher trait with a salted Argon2id implementation

use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Version,
};
use ring::rand::{SecureRandom, SystemRandom};

use crate::config::TokenServiceConfig;
use crate::error::{TokenError, TokenResult};

/// Salt length in bytes for each hashed secret
const SALT_LEN: usize = 16;

/// Irreversible, salted hashing of raw secrets.
///
/// `verify` recomputes the hash from `secret` using the parameters and salt
/// embedded in `digest` and compares in constant time.
pub trait TokenHasher: Send + Sync {
    fn hash(&self, secret: &[u8]) -> TokenResult<Vec<u8>>;

    fn verify(&self, secret: &[u8], digest: &[u8]) -> TokenResult<bool>;
}

/// Argon2id hasher producing PHC-format digests
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
    rng: SystemRandom,
}

impl Argon2Hasher {
    pub fn new(config: &TokenServiceConfig) -> TokenResult<Self> {
        let params = config.argon2_params()?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            rng: SystemRandom::new(),
        })
    }

    fn generate_salt(&self) -> TokenResult<SaltString> {
        let mut salt = [0u8; SALT_LEN];
        self.rng.fill(&mut salt).map_err(|_| {
            TokenError::Generation("Failed to generate hash salt".to_string())
        })?;

        SaltString::encode_b64(&salt).map_err(|e| TokenError::Hashing(e.to_string()))
    }
}

impl TokenHasher for Argon2Hasher {
    fn hash(&self, secret: &[u8]) -> TokenResult<Vec<u8>> {
        let salt = self.generate_salt()?;

        let hash = self
            .argon2
            .hash_password(secret, &salt)
            .map_err(|e| TokenError::Hashing(e.to_string()))?;

        Ok(hash.to_string().into_bytes())
    }

    fn verify(&self, secret: &[u8], digest: &[u8]) -> TokenResult<bool> {
        let phc = std::str::from_utf8(digest)
            .map_err(|_| TokenError::Hashing("Digest is not valid UTF-8".to_string()))?;
        let parsed = PasswordHash::new(phc)
            .map_err(|e| TokenError::Hashing(format!("Unreadable digest: {}", e)))?;

        match self.argon2.verify_password(secret, &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(TokenError::Hashing(e.to_string())),
        }
    }
}
