//! Authenticated encryption capability trait

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::Result;

pub mod gcm;
pub mod ocb;

/// An authenticated cipher with associated data.
///
/// One instance is bound to one key and one nonce; encrypting two messages
/// under the same instance would reuse the nonce, so callers construct a
/// fresh instance (or derive a fresh nonce) per message. Output layout is
/// always `ciphertext || tag`, with nothing else embedded.
pub trait AeadCipher {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Nonce size in bytes for the default construction
    const NONCE_SIZE: usize;

    /// Tag size in bytes
    const TAG_SIZE: usize;

    /// Human-readable mode name
    fn algorithm() -> &'static str;

    /// Encrypt and authenticate, returning `ciphertext || tag`
    fn encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>>;

    /// Verify and decrypt `ciphertext || tag`.
    ///
    /// On any verification failure no plaintext is released and the error
    /// carries nothing beyond the algorithm name.
    fn decrypt(&self, ciphertext_and_tag: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>>;
}
