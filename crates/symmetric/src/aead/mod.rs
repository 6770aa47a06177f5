//! Concrete AEAD suites: one type per (block cipher, mode) pairing
//!
//! Each suite holds a keyed block cipher and hands a clone of it to the mode
//! composer per message, together with that message's nonce. The suites add
//! no cryptography of their own; they fix the generics and put the suite
//! name on errors.

pub mod gcm;
pub mod ocb;
