//! Internal support code shared across the VEILCRYPT workspace
//!
//! Nothing in this crate is cryptographic on its own; it provides the
//! constant-time building blocks the primitive crates lean on.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod constant_time;
