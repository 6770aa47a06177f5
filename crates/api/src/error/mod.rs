//! Error taxonomy for the VEILCRYPT public boundary
//!
//! Four failure families cross the public boundary, and nothing else:
//! configuration errors (an unknown preset token), size mismatches (a buffer
//! that disagrees with the resolved instance's descriptor), authentication
//! failures (one opaque signal, no detail about which stage failed) and I/O
//! failures on the streaming paths. All of them are ordinary return values;
//! none is ever downgraded to a default behavior.

use core::fmt;

#[cfg(feature = "std")]
use std::string::String;

/// The error type returned across the public VEILCRYPT boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Preset token is not in the registry's closed catalog
    UnknownPreset {
        /// The rejected token
        #[cfg(feature = "std")]
        name: String,
    },

    /// Key material rejected before use
    InvalidKey {
        /// Operation that rejected the key
        context: &'static str,
        /// Human-readable detail
        #[cfg(feature = "std")]
        message: String,
    },

    /// A buffer length disagrees with the resolved instance's descriptor
    InvalidLength {
        /// Boundary where the mismatch was caught
        context: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Supplied length in bytes
        actual: usize,
    },

    /// A parameter failed validation
    InvalidParameter {
        /// Parameter or operation name
        context: &'static str,
        /// Human-readable detail
        #[cfg(feature = "std")]
        message: String,
    },

    /// Tag verification failed on decrypt.
    ///
    /// Deliberately carries nothing beyond the suite name: no byte index,
    /// no stage, no partial plaintext.
    AuthenticationFailed {
        /// Suite that rejected the input
        context: &'static str,
    },

    /// Failure propagated from an external source or sink
    #[cfg(feature = "std")]
    Io {
        /// Streaming operation that was interrupted
        context: &'static str,
        /// Rendering of the underlying I/O error
        message: String,
    },

    /// Fallback for errors with no dedicated arm
    Other {
        /// Originating operation
        context: &'static str,
        /// Human-readable detail
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for operations crossing the public boundary
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Error::UnknownPreset { name } => {
                write!(f, "unknown preset '{}'", name)
            }
            #[cfg(not(feature = "std"))]
            Error::UnknownPreset {} => write!(f, "unknown preset"),
            #[cfg(feature = "std")]
            Error::InvalidKey { context, message } => {
                write!(f, "invalid key in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Error::InvalidKey { context } => write!(f, "invalid key in {}", context),
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Error::InvalidParameter { context, message } => {
                write!(f, "invalid parameter '{}': {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Error::InvalidParameter { context } => {
                write!(f, "invalid parameter '{}'", context)
            }
            Error::AuthenticationFailed { context } => {
                write!(f, "authentication failed for {}", context)
            }
            #[cfg(feature = "std")]
            Error::Io { context, message } => {
                write!(f, "i/o failure in {}: {}", context, message)
            }
            #[cfg(feature = "std")]
            Error::Other { context, message } => write!(f, "{}: {}", context, message),
            #[cfg(not(feature = "std"))]
            Error::Other { context } => write!(f, "error in {}", context),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            context: "stream",
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_boundary() {
        let err = Error::InvalidLength {
            context: "GCM key",
            expected: 16,
            actual: 15,
        };
        assert_eq!(
            err.to_string(),
            "invalid length for GCM key: expected 16, got 15"
        );
    }

    #[test]
    fn authentication_failure_is_opaque() {
        let err = Error::AuthenticationFailed { context: "AES-128-GCM" };
        assert_eq!(err.to_string(), "authentication failed for AES-128-GCM");
    }
}
