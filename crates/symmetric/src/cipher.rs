//! Traits implemented by every concrete cipher suite

use crate::error::Result;

/// A symmetric cipher constructed from a typed key.
///
/// The key type fixes the key length, so construction cannot fail; whether
/// key bytes from the outside world fit the type is decided earlier, by the
/// key type's own `from_bytes`.
pub trait SymmetricCipher: Sized {
    /// Typed key this suite is built from
    type Key;

    /// Build the suite, expanding whatever schedule the algorithm needs
    fn new(key: &Self::Key) -> Self;

    /// Suite name, e.g. `"AES-128-GCM"`
    fn name() -> &'static str;
}

/// Authenticated encryption with associated data over a typed nonce.
///
/// `encrypt` returns `ciphertext || tag` and nothing else; the nonce is the
/// caller's to transport. Each (key, nonce) pair must be used for exactly
/// one message.
pub trait Aead: SymmetricCipher {
    /// Typed nonce this suite accepts
    type Nonce;

    /// Draw a fresh random nonce from the operating system
    fn generate_nonce() -> Self::Nonce;

    /// Encrypt and authenticate `plaintext`, binding `aad` if present
    fn encrypt(
        &self,
        nonce: &Self::Nonce,
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>>;

    /// Verify and decrypt `ciphertext || tag`
    fn decrypt(
        &self,
        nonce: &Self::Nonce,
        ciphertext_and_tag: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>>;
}
