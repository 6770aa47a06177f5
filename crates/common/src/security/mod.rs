//! Secure memory types and barriers
//!
//! Foundational patterns for handling sensitive material: fixed-size secret
//! storage with guaranteed zeroization, and compiler fences that keep the
//! optimizer from reordering or eliding wipes.

pub mod memory;
pub mod secret;

pub use memory::barrier;
pub use secret::{SecretBuffer, SecureZeroingType};
