//! Concrete symmetric cipher suites and the developer-facing facade
//!
//! This crate turns the generic composers from `veilcrypt-algorithms` into
//! named, ready-to-use suites (AES-128/256 with GCM or OCB), publishes them
//! through a closed preset registry, and wraps the registry in an
//! [`Encryptor`] facade that covers the common path: pick a preset by token,
//! generate a key, encrypt, decrypt, or stream through any reader/writer
//! pair.
//!
//! Everything here is std-facing by design: the facade deals in byte slices
//! and `std::io`, while the type-level guarantees live one layer down.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub use error::{Error, Result};

pub mod cipher;
pub use cipher::{Aead, SymmetricCipher};

pub mod aes;
pub use aes::{Aes128Key, Aes256Key};

pub mod aead;
pub use aead::gcm::{Aes128Gcm, Aes256Gcm};
pub use aead::ocb::{Aes128Ocb, Aes256Ocb};

pub mod registry;
pub use registry::{resolve, AeadSuite, Preset, SuiteInfo};

pub mod encryptor;
pub use encryptor::{Encryptor, NonceSequence};

pub mod streaming;
pub use streaming::{DecryptStream, EncryptStream};
