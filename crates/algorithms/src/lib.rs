//! Cryptographic primitives and generic mode composers
//!
//! This crate holds the capability layer of VEILCRYPT: the traits a block or
//! stream cipher must satisfy, the concrete constant-time AES permutations,
//! and the generic mode-of-operation composers (CTR, GCM, OCB) that turn any
//! conforming block cipher into a stream cipher or an AEAD cipher.
//!
//! Composition is by ownership: a composer takes its underlying cipher by
//! value and becomes its sole owner, so one keyed primitive can never serve
//! two modes at once. All fixed sizes (key, block, nonce, tag) are part of
//! the types; a buffer of the wrong length is a compile error wherever the
//! type system can see it and a [`error::Error::Length`] at the first call
//! boundary everywhere else.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub use error::{validate, Error, Result};

pub mod types;
pub use types::{Nonce, Tag};

pub mod block;
pub use block::aes::{Aes128, Aes256};
pub use block::modes::ctr::Ctr;
pub use block::{BlockCipher, BlockCipherAlgorithm, NonceGenerator};

pub mod stream;
pub use stream::StreamCipher;

#[cfg(feature = "alloc")]
pub mod aead;
#[cfg(feature = "alloc")]
pub use aead::gcm::Gcm;
#[cfg(feature = "alloc")]
pub use aead::ocb::Ocb;
#[cfg(feature = "alloc")]
pub use aead::AeadCipher;
