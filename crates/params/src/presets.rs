//! The closed catalog of preset identifiers
//!
//! A preset token is an opaque handle a non-expert caller passes to the
//! developer facade. The token carries no algorithmic meaning for the caller;
//! the registry maps it to exactly one concrete instantiation. The catalog is
//! closed-world: adding a preset means editing this file and rebuilding.

/// AES-128 under GCM, 96-bit nonce, 128-bit tag
pub const AES128_GCM_DEFAULT: &str = "AES128-GCM-DEFAULT";

/// AES-256 under GCM, 96-bit nonce, 128-bit tag
pub const AES256_GCM_DEFAULT: &str = "AES256-GCM-DEFAULT";

/// AES-128 under OCB, 96-bit nonce, 128-bit tag
pub const AES128_OCB_DEFAULT: &str = "AES128-OCB-DEFAULT";

/// AES-256 under OCB, 96-bit nonce, 128-bit tag
pub const AES256_OCB_DEFAULT: &str = "AES256-OCB-DEFAULT";

/// Every token the registry accepts, in catalog order
pub const ALL: &[&str] = &[
    AES128_GCM_DEFAULT,
    AES256_GCM_DEFAULT,
    AES128_OCB_DEFAULT,
    AES256_OCB_DEFAULT,
];
