// ABOUTME: Cryptographically secure secret generation
// ABOUTME: Pluggable source of random bytes backed by the operating system RNG

use ring::rand::{SecureRandom, SystemRandom};

use crate::error::{TokenError, TokenResult};

/// Length of a raw developer token secret in bytes
pub const SECRET_LEN: usize = 32;

/// Source of secure random bytes
pub trait SecretGenerator: Send + Sync {
    /// Fill `dest` entirely with random bytes, or fail without partial output
    fn fill(&self, dest: &mut [u8]) -> TokenResult<()>;
}

/// Secret generator using the system CSPRNG
#[derive(Debug)]
pub struct SystemSecretGenerator {
    rng: SystemRandom,
}

impl SystemSecretGenerator {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for SystemSecretGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretGenerator for SystemSecretGenerator {
    fn fill(&self, dest: &mut [u8]) -> TokenResult<()> {
        self.rng.fill(dest).map_err(|_| {
            TokenError::Generation("System random source unavailable".to_string())
        })
    }
}
