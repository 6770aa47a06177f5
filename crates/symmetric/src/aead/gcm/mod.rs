//! AES-GCM suites

use rand::rngs::OsRng;

use algorithms::types::Nonce;
use algorithms::{Aes128, Aes256, Gcm};
use params::symmetric::GCM_NONCE_SIZE;

use crate::aes::{Aes128Key, Aes256Key};
use crate::cipher::{Aead, SymmetricCipher};
use crate::error::{suite_error, Result};

/// AES-128 in Galois/Counter Mode
pub struct Aes128Gcm {
    cipher: Aes128,
}

impl SymmetricCipher for Aes128Gcm {
    type Key = Aes128Key;

    fn new(key: &Self::Key) -> Self {
        Self {
            cipher: <Aes128 as algorithms::BlockCipher>::new(key.inner()),
        }
    }

    fn name() -> &'static str {
        "AES-128-GCM"
    }
}

impl Aead for Aes128Gcm {
    type Nonce = Nonce<GCM_NONCE_SIZE>;

    fn generate_nonce() -> Self::Nonce {
        Nonce::random(&mut OsRng)
    }

    fn encrypt(
        &self,
        nonce: &Self::Nonce,
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        Gcm::new(self.cipher.clone(), nonce)
            .internal_encrypt(plaintext, aad)
            .map_err(|e| suite_error(e, Self::name()))
    }

    fn decrypt(
        &self,
        nonce: &Self::Nonce,
        ciphertext_and_tag: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        Gcm::new(self.cipher.clone(), nonce)
            .internal_decrypt(ciphertext_and_tag, aad)
            .map_err(|e| suite_error(e, Self::name()))
    }
}

/// AES-256 in Galois/Counter Mode
pub struct Aes256Gcm {
    cipher: Aes256,
}

impl SymmetricCipher for Aes256Gcm {
    type Key = Aes256Key;

    fn new(key: &Self::Key) -> Self {
        Self {
            cipher: <Aes256 as algorithms::BlockCipher>::new(key.inner()),
        }
    }

    fn name() -> &'static str {
        "AES-256-GCM"
    }
}

impl Aead for Aes256Gcm {
    type Nonce = Nonce<GCM_NONCE_SIZE>;

    fn generate_nonce() -> Self::Nonce {
        Nonce::random(&mut OsRng)
    }

    fn encrypt(
        &self,
        nonce: &Self::Nonce,
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        Gcm::new(self.cipher.clone(), nonce)
            .internal_encrypt(plaintext, aad)
            .map_err(|e| suite_error(e, Self::name()))
    }

    fn decrypt(
        &self,
        nonce: &Self::Nonce,
        ciphertext_and_tag: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        Gcm::new(self.cipher.clone(), nonce)
            .internal_decrypt(ciphertext_and_tag, aad)
            .map_err(|e| suite_error(e, Self::name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn round_trip_both_key_sizes() {
        let key = Aes128Key::generate();
        let suite = Aes128Gcm::new(&key);
        let nonce = Aes128Gcm::generate_nonce();
        let sealed = suite.encrypt(&nonce, b"small message", Some(b"hdr")).unwrap();
        assert_eq!(sealed.len(), 13 + 16);
        assert_eq!(
            suite.decrypt(&nonce, &sealed, Some(b"hdr")).unwrap(),
            b"small message"
        );

        let key = Aes256Key::generate();
        let suite = Aes256Gcm::new(&key);
        let nonce = Aes256Gcm::generate_nonce();
        let sealed = suite.encrypt(&nonce, b"small message", None).unwrap();
        assert_eq!(suite.decrypt(&nonce, &sealed, None).unwrap(), b"small message");
    }

    #[test]
    fn wrong_key_fails_with_suite_name() {
        let nonce = Aes128Gcm::generate_nonce();
        let sealed = Aes128Gcm::new(&Aes128Key::generate())
            .encrypt(&nonce, b"secret", None)
            .unwrap();

        let other = Aes128Gcm::new(&Aes128Key::generate());
        let err = other.decrypt(&nonce, &sealed, None).unwrap_err();
        assert!(matches!(
            err,
            Error::AuthenticationFailed {
                context: "AES-128-GCM"
            }
        ));
    }
}
