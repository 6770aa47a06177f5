//! Error handling for the suite and facade layer
//!
//! This layer speaks the public [`api::Error`] taxonomy directly. Primitive
//! errors convert through `From`; the one adjustment made here is stamping
//! authentication failures with the suite name instead of the bare mode
//! name, so a caller sees `AES-128-GCM` rather than `GCM`.

pub use api::{Error, Result};

/// Convert a primitive-layer error, rebranding authentication failures
/// with the full suite name
pub(crate) fn suite_error(err: algorithms::Error, suite: &'static str) -> Error {
    match err {
        algorithms::Error::Authentication { .. } => Error::AuthenticationFailed { context: suite },
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_is_rebranded() {
        let err = suite_error(
            algorithms::Error::Authentication { algorithm: "GCM" },
            "AES-256-GCM",
        );
        assert!(matches!(
            err,
            Error::AuthenticationFailed {
                context: "AES-256-GCM"
            }
        ));
    }

    #[test]
    fn lengths_pass_through() {
        let err = suite_error(
            algorithms::Error::Length {
                context: "GCM ciphertext",
                needed: 16,
                got: 3,
            },
            "AES-128-GCM",
        );
        assert!(matches!(err, Error::InvalidLength { expected: 16, actual: 3, .. }));
    }
}
