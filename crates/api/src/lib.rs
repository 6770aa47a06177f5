//! Public API types for the VEILCRYPT library
//!
//! This crate carries the surface every other workspace member agrees on:
//! the error taxonomy returned across the public boundary and the secret
//! byte containers that keys travel in.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{SecretBytes, SecretVec};
