// ABOUTME: Text encoding for raw secrets and hash digests
// ABOUTME: Base58 (Bitcoin alphabet) keeps tokens unpadded and free of look-alike characters

use crate::error::{TokenError, TokenResult};

/// Bitcoin Base58 alphabet
pub const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encode bytes into Base58 text
pub fn encode(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode Base58 text back into bytes
pub fn decode(text: &str) -> TokenResult<Vec<u8>> {
    bs58::decode(text)
        .into_vec()
        .map_err(|e| TokenError::Encoding(e.to_string()))
}

/// Longest Base58 text that `byte_len` bytes can encode to
pub fn max_encoded_len(byte_len: usize) -> usize {
    encode(&vec![0xff; byte_len]).len()
}

/// Linear-time check that `text` only uses Base58 characters
pub fn is_base58(text: &str) -> bool {
    text.chars().all(|c| ALPHABET.contains(c))
}
