//! Parameter constants for the VEILCRYPT library
//!
//! Every fixed size used by the symmetric stack lives here, so a key, nonce,
//! block or tag length is written down exactly once and every crate that
//! validates a buffer agrees on the number.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod presets;
pub mod symmetric;
