//! AES-OCB suites

use rand::rngs::OsRng;

use algorithms::types::Nonce;
use algorithms::{Aes128, Aes256, Ocb};
use params::symmetric::OCB_NONCE_SIZE;

use crate::aes::{Aes128Key, Aes256Key};
use crate::cipher::{Aead, SymmetricCipher};
use crate::error::{suite_error, Result};

/// AES-128 in Offset Codebook mode
pub struct Aes128Ocb {
    cipher: Aes128,
}

impl SymmetricCipher for Aes128Ocb {
    type Key = Aes128Key;

    fn new(key: &Self::Key) -> Self {
        Self {
            cipher: <Aes128 as algorithms::BlockCipher>::new(key.inner()),
        }
    }

    fn name() -> &'static str {
        "AES-128-OCB"
    }
}

impl Aead for Aes128Ocb {
    type Nonce = Nonce<OCB_NONCE_SIZE>;

    fn generate_nonce() -> Self::Nonce {
        Nonce::random(&mut OsRng)
    }

    fn encrypt(
        &self,
        nonce: &Self::Nonce,
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        Ocb::new(self.cipher.clone(), nonce)
            .internal_encrypt(plaintext, aad)
            .map_err(|e| suite_error(e, Self::name()))
    }

    fn decrypt(
        &self,
        nonce: &Self::Nonce,
        ciphertext_and_tag: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        Ocb::new(self.cipher.clone(), nonce)
            .internal_decrypt(ciphertext_and_tag, aad)
            .map_err(|e| suite_error(e, Self::name()))
    }
}

/// AES-256 in Offset Codebook mode
pub struct Aes256Ocb {
    cipher: Aes256,
}

impl SymmetricCipher for Aes256Ocb {
    type Key = Aes256Key;

    fn new(key: &Self::Key) -> Self {
        Self {
            cipher: <Aes256 as algorithms::BlockCipher>::new(key.inner()),
        }
    }

    fn name() -> &'static str {
        "AES-256-OCB"
    }
}

impl Aead for Aes256Ocb {
    type Nonce = Nonce<OCB_NONCE_SIZE>;

    fn generate_nonce() -> Self::Nonce {
        Nonce::random(&mut OsRng)
    }

    fn encrypt(
        &self,
        nonce: &Self::Nonce,
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        Ocb::new(self.cipher.clone(), nonce)
            .internal_encrypt(plaintext, aad)
            .map_err(|e| suite_error(e, Self::name()))
    }

    fn decrypt(
        &self,
        nonce: &Self::Nonce,
        ciphertext_and_tag: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        Ocb::new(self.cipher.clone(), nonce)
            .internal_decrypt(ciphertext_and_tag, aad)
            .map_err(|e| suite_error(e, Self::name()))
    }
}
