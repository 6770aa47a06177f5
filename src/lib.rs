//! # veilcrypt
//!
//! A layered symmetric encryption library built from composable parts.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! veilcrypt = "0.1"
//! ```
//!
//! The five-minute path goes through the facade:
//!
//! ```no_run
//! use veilcrypt::prelude::*;
//!
//! fn main() -> veilcrypt::Result<()> {
//!     let enc = Encryptor::new("AES128-GCM-DEFAULT")?;
//!     let key = enc.key_gen();
//!     let sealed = enc.encrypt(None, b"hello", key.as_ref())?;
//!     let opened = enc.decrypt(None, &sealed, key.as_ref())?;
//!     assert_eq!(opened, b"hello");
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from the layer
//! crates:
//!
//! - `veilcrypt-algorithms`: capability traits, AES, and the generic CTR,
//!   GCM and OCB composers
//! - `veilcrypt-symmetric`: concrete suites, the preset registry, the
//!   [`Encryptor`](symmetric::Encryptor) facade and `std::io` streaming
//! - `veilcrypt-api`, `veilcrypt-common`, `veilcrypt-internal`,
//!   `veilcrypt-params`: errors and secret types, secure memory, constant
//!   time helpers, and the shared size constants

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use api;
pub use common;
pub use internal;
pub use params;

pub use algorithms;

#[cfg(feature = "symmetric")]
pub use symmetric;

pub use api::{Error, Result};

/// Common imports for veilcrypt users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result};

    // Capability traits
    pub use crate::algorithms::{BlockCipher, BlockCipherAlgorithm, NonceGenerator, StreamCipher};

    #[cfg(feature = "alloc")]
    pub use crate::algorithms::AeadCipher;

    // Value and secret types
    pub use crate::algorithms::types::{Nonce, Tag};
    pub use crate::api::SecretBytes;

    #[cfg(feature = "alloc")]
    pub use crate::api::SecretVec;

    pub use crate::common::{SecretBuffer, SecureZeroingType};

    // Suites, registry and facade
    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{
        Aead, AeadSuite, Encryptor, NonceSequence, Preset, SuiteInfo, SymmetricCipher,
    };
}
