//! Closed preset registry
//!
//! The catalog of available suites is a plain enum, so dispatch is a match
//! and the set of reachable algorithms is fixed at compile time. A preset
//! token is the stable string form of one enum arm; resolving it yields a
//! boxed [`AeadSuite`], the object-safe surface the facade and the streaming
//! layer program against.
//!
//! Suites behind this trait take keys and nonces as byte slices and validate
//! their lengths against the suite descriptor before any cryptography runs.

use rand::rngs::OsRng;
use rand::RngCore;

use algorithms::types::{Nonce, SecretVec};
use params::{presets, symmetric};

use crate::aead::gcm::{Aes128Gcm, Aes256Gcm};
use crate::aead::ocb::{Aes128Ocb, Aes256Ocb};
use crate::aes::{Aes128Key, Aes256Key};
use crate::cipher::{Aead, SymmetricCipher};
use crate::error::{Error, Result};

/// Fixed sizes and names of one suite, available before any key exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteInfo {
    /// Suite name, e.g. `"AES-128-GCM"`
    pub name: &'static str,
    /// Registry token that resolves to this suite
    pub token: &'static str,
    /// Key size in bytes
    pub key_size: usize,
    /// Nonce size in bytes
    pub nonce_size: usize,
    /// Tag size in bytes
    pub tag_size: usize,
}

/// Object-safe suite surface used by the facade and the streaming layer.
///
/// `seal` and `open` accept untyped byte slices; lengths are checked against
/// [`SuiteInfo`] here, at the last boundary where the suite is still chosen
/// at runtime.
pub trait AeadSuite: Send + Sync {
    /// Descriptor of this suite
    fn info(&self) -> SuiteInfo;

    /// Draw a key of the suite's size from the operating system RNG
    fn generate_key(&self) -> SecretVec;

    /// Draw a nonce of the suite's size from the operating system RNG
    fn generate_nonce(&self) -> Vec<u8>;

    /// Encrypt and authenticate, returning `ciphertext || tag`
    fn seal(
        &self,
        key: &[u8],
        nonce: &[u8],
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>>;

    /// Verify and decrypt `ciphertext || tag`
    fn open(
        &self,
        key: &[u8],
        nonce: &[u8],
        ciphertext_and_tag: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>>;
}

/// The closed catalog of presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// AES-128-GCM with default parameters
    Aes128GcmDefault,
    /// AES-256-GCM with default parameters
    Aes256GcmDefault,
    /// AES-128-OCB with default parameters
    Aes128OcbDefault,
    /// AES-256-OCB with default parameters
    Aes256OcbDefault,
}

impl Preset {
    /// Every preset, in registry order
    pub fn all() -> &'static [Preset] {
        &[
            Preset::Aes128GcmDefault,
            Preset::Aes256GcmDefault,
            Preset::Aes128OcbDefault,
            Preset::Aes256OcbDefault,
        ]
    }

    /// Look a token up in the catalog
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            presets::AES128_GCM_DEFAULT => Ok(Preset::Aes128GcmDefault),
            presets::AES256_GCM_DEFAULT => Ok(Preset::Aes256GcmDefault),
            presets::AES128_OCB_DEFAULT => Ok(Preset::Aes128OcbDefault),
            presets::AES256_OCB_DEFAULT => Ok(Preset::Aes256OcbDefault),
            _ => Err(Error::UnknownPreset {
                name: token.to_string(),
            }),
        }
    }

    /// The stable string form of this preset
    pub fn token(&self) -> &'static str {
        match self {
            Preset::Aes128GcmDefault => presets::AES128_GCM_DEFAULT,
            Preset::Aes256GcmDefault => presets::AES256_GCM_DEFAULT,
            Preset::Aes128OcbDefault => presets::AES128_OCB_DEFAULT,
            Preset::Aes256OcbDefault => presets::AES256_OCB_DEFAULT,
        }
    }

    /// Descriptor of the suite this preset resolves to
    pub fn info(&self) -> SuiteInfo {
        self.resolve().info()
    }

    /// Instantiate the suite behind this preset
    pub fn resolve(&self) -> Box<dyn AeadSuite> {
        match self {
            Preset::Aes128GcmDefault => Box::new(Aes128GcmSuite),
            Preset::Aes256GcmDefault => Box::new(Aes256GcmSuite),
            Preset::Aes128OcbDefault => Box::new(Aes128OcbSuite),
            Preset::Aes256OcbDefault => Box::new(Aes256OcbSuite),
        }
    }
}

/// Resolve a preset token straight to a suite instance
pub fn resolve(token: &str) -> Result<Box<dyn AeadSuite>> {
    Ok(Preset::from_token(token)?.resolve())
}

macro_rules! registry_suite {
    ($suite:ident, $cipher:ty, $key:ty, $token:path, $name:literal, $key_size:path, $nonce_size:path, $tag_size:path) => {
        struct $suite;

        impl AeadSuite for $suite {
            fn info(&self) -> SuiteInfo {
                SuiteInfo {
                    name: $name,
                    token: $token,
                    key_size: $key_size,
                    nonce_size: $nonce_size,
                    tag_size: $tag_size,
                }
            }

            fn generate_key(&self) -> SecretVec {
                SecretVec::random(&mut OsRng, $key_size)
            }

            fn generate_nonce(&self) -> Vec<u8> {
                let mut nonce = vec![0u8; $nonce_size];
                OsRng.fill_bytes(&mut nonce);
                nonce
            }

            fn seal(
                &self,
                key: &[u8],
                nonce: &[u8],
                plaintext: &[u8],
                aad: Option<&[u8]>,
            ) -> Result<Vec<u8>> {
                let key = <$key>::from_bytes(key)?;
                let nonce = checked_nonce(nonce, concat!($name, " nonce"))?;
                <$cipher>::new(&key).encrypt(&nonce, plaintext, aad)
            }

            fn open(
                &self,
                key: &[u8],
                nonce: &[u8],
                ciphertext_and_tag: &[u8],
                aad: Option<&[u8]>,
            ) -> Result<Vec<u8>> {
                let key = <$key>::from_bytes(key)?;
                let nonce = checked_nonce(nonce, concat!($name, " nonce"))?;
                <$cipher>::new(&key).decrypt(&nonce, ciphertext_and_tag, aad)
            }
        }
    };
}

/// Convert a nonce slice into the typed nonce, naming the suite on failure
fn checked_nonce<const N: usize>(nonce: &[u8], context: &'static str) -> Result<Nonce<N>> {
    if nonce.len() != N {
        return Err(Error::InvalidLength {
            context,
            expected: N,
            actual: nonce.len(),
        });
    }
    Ok(Nonce::from_slice(nonce).map_err(Error::from)?)
}

registry_suite!(
    Aes128GcmSuite,
    Aes128Gcm,
    Aes128Key,
    presets::AES128_GCM_DEFAULT,
    "AES-128-GCM",
    symmetric::AES128_KEY_SIZE,
    symmetric::GCM_NONCE_SIZE,
    symmetric::GCM_TAG_SIZE
);

registry_suite!(
    Aes256GcmSuite,
    Aes256Gcm,
    Aes256Key,
    presets::AES256_GCM_DEFAULT,
    "AES-256-GCM",
    symmetric::AES256_KEY_SIZE,
    symmetric::GCM_NONCE_SIZE,
    symmetric::GCM_TAG_SIZE
);

registry_suite!(
    Aes128OcbSuite,
    Aes128Ocb,
    Aes128Key,
    presets::AES128_OCB_DEFAULT,
    "AES-128-OCB",
    symmetric::AES128_KEY_SIZE,
    symmetric::OCB_NONCE_SIZE,
    symmetric::OCB_TAG_SIZE
);

registry_suite!(
    Aes256OcbSuite,
    Aes256Ocb,
    Aes256Key,
    presets::AES256_OCB_DEFAULT,
    "AES-256-OCB",
    symmetric::AES256_KEY_SIZE,
    symmetric::OCB_NONCE_SIZE,
    symmetric::OCB_TAG_SIZE
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_resolves_to_a_matching_descriptor() {
        for preset in Preset::all() {
            let suite = preset.resolve();
            let info = suite.info();
            assert_eq!(info.token, preset.token());
            assert_eq!(Preset::from_token(info.token).unwrap(), *preset);
        }
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = Preset::from_token("AES128-CBC-DEFAULT").unwrap_err();
        assert!(matches!(err, Error::UnknownPreset { .. }));
    }

    #[test]
    fn token_catalog_matches_params() {
        let tokens: Vec<&str> = Preset::all().iter().map(|p| p.token()).collect();
        assert_eq!(tokens, presets::ALL);
    }

    #[test]
    fn seal_and_open_through_the_object_surface() {
        let suite = resolve(presets::AES256_GCM_DEFAULT).unwrap();
        let key = suite.generate_key();
        let nonce = suite.generate_nonce();

        let sealed = suite
            .seal(key.as_ref(), &nonce, b"registry path", Some(b"meta"))
            .unwrap();
        assert_eq!(sealed.len(), 13 + suite.info().tag_size);

        let opened = suite
            .open(key.as_ref(), &nonce, &sealed, Some(b"meta"))
            .unwrap();
        assert_eq!(opened, b"registry path");
    }

    #[test]
    fn short_key_is_a_length_error_not_a_panic() {
        let suite = resolve(presets::AES128_OCB_DEFAULT).unwrap();
        let err = suite.seal(&[0u8; 7], &[0u8; 12], b"x", None).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidLength {
                expected: 16,
                actual: 7,
                ..
            }
        ));
    }
}
