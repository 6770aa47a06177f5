//! Shared security primitives for the VEILCRYPT workspace
//!
//! Key schedules, intermediate keystreams and other secret state live inside
//! the containers defined here, so zeroization on drop is a property of the
//! type rather than a discipline every call site has to remember.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod security;

pub use security::{barrier, SecretBuffer, SecureZeroingType};
