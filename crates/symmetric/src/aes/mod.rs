//! Typed AES key material
//!
//! The key types are the boundary between untyped byte slices arriving from
//! callers and the const-generic containers the primitives consume. Once a
//! key value exists, its length can no longer be wrong.

use rand::rngs::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use algorithms::types::SecretBytes;
use params::symmetric::{AES128_KEY_SIZE, AES256_KEY_SIZE};

use crate::error::{Error, Result};

/// A 128-bit AES key, zeroed on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128Key {
    bytes: SecretBytes<AES128_KEY_SIZE>,
}

impl Aes128Key {
    /// Draw a fresh key from the operating system RNG
    pub fn generate() -> Self {
        Self {
            bytes: SecretBytes::random(&mut OsRng),
        }
    }

    /// Adopt key bytes, rejecting any length other than sixteen
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != AES128_KEY_SIZE {
            return Err(Error::InvalidLength {
                context: "AES-128 key",
                expected: AES128_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes: SecretBytes::from_slice(bytes)?,
        })
    }

    /// View the raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }

    pub(crate) fn inner(&self) -> &SecretBytes<AES128_KEY_SIZE> {
        &self.bytes
    }
}

/// A 256-bit AES key, zeroed on drop
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Aes256Key {
    bytes: SecretBytes<AES256_KEY_SIZE>,
}

impl Aes256Key {
    /// Draw a fresh key from the operating system RNG
    pub fn generate() -> Self {
        Self {
            bytes: SecretBytes::random(&mut OsRng),
        }
    }

    /// Adopt key bytes, rejecting any length other than thirty-two
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != AES256_KEY_SIZE {
            return Err(Error::InvalidLength {
                context: "AES-256 key",
                expected: AES256_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes: SecretBytes::from_slice(bytes)?,
        })
    }

    /// View the raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }

    pub(crate) fn inner(&self) -> &SecretBytes<AES256_KEY_SIZE> {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_differ() {
        let a = Aes128Key::generate();
        let b = Aes128Key::generate();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn from_bytes_rejects_wrong_length() {
        let err = Aes256Key::from_bytes(&[0u8; 16]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidLength {
                context: "AES-256 key",
                expected: 32,
                actual: 16,
            }
        ));
    }
}
