//! Private seal for the nonce compatibility traits.
//!
//! Only this crate can name `sealed::Sealed`, so downstream code cannot
//! declare new nonce lengths compatible with a mode.

pub trait Sealed {}
