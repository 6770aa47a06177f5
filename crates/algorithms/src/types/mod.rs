//! Fixed-size value types shared by the primitives and composers
//!
//! Nonces and tags carry their byte length as a const generic, and each mode
//! declares which lengths it accepts through sealed marker traits. Handing a
//! [`Nonce<7>`] to GCM is therefore a type error, not a runtime check.

mod nonce;
mod tag;

pub(crate) mod sealed;

pub use nonce::{CtrCompatible, GcmCompatible, Nonce, OcbCompatible};
pub use tag::Tag;

pub use api::{SecretBytes, SecretVec};
pub use common::SecretBuffer;
