//! Error handling for the primitive layer
//!
//! Errors here name the primitive boundary that rejected the input. They are
//! converted into the coarser public [`api::Error`] taxonomy when they cross
//! out of the composition layer, so callers of the facade never see which
//! internal stage failed.

use core::fmt;

pub mod validate;

/// Error type for primitive and composer operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A parameter failed validation
    Parameter {
        /// Name of the offending parameter
        name: &'static str,
        /// What the parameter must satisfy
        reason: &'static str,
    },

    /// A buffer length disagrees with a fixed size
    Length {
        /// Boundary where the mismatch was caught
        context: &'static str,
        /// Required length in bytes
        needed: usize,
        /// Supplied length in bytes
        got: usize,
    },

    /// Tag verification failed
    Authentication {
        /// Algorithm that rejected the input
        algorithm: &'static str,
    },

    /// An operation could not be carried out on otherwise valid input
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// What went wrong
        details: &'static str,
    },

    /// Catch-all for errors with no dedicated arm
    Other(&'static str),
}

/// Result type for primitive and composer operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                needed,
                got,
            } => {
                write!(
                    f,
                    "invalid length for {}: needed {}, got {}",
                    context, needed, got
                )
            }
            Error::Authentication { algorithm } => {
                write!(f, "authentication failed for {}", algorithm)
            }
            Error::Processing { operation, details } => {
                write!(f, "processing error in {}: {}", operation, details)
            }
            Error::Other(msg) => write!(f, "error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, .. } => api::Error::InvalidParameter {
                context: name,
                #[cfg(feature = "std")]
                message: err.to_string(),
            },
            Error::Length {
                context,
                needed,
                got,
            } => api::Error::InvalidLength {
                context,
                expected: needed,
                actual: got,
            },
            Error::Authentication { algorithm } => api::Error::AuthenticationFailed {
                context: algorithm,
            },
            Error::Processing { operation, .. } => api::Error::Other {
                context: operation,
                #[cfg(feature = "std")]
                message: err.to_string(),
            },
            Error::Other(msg) => api::Error::Other {
                context: msg,
                #[cfg(feature = "std")]
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_display_carries_both_sizes() {
        let err = Error::Length {
            context: "GCM ciphertext",
            needed: 16,
            got: 7,
        };
        assert_eq!(
            err.to_string(),
            "invalid length for GCM ciphertext: needed 16, got 7"
        );
    }

    #[test]
    fn authentication_maps_to_public_authentication() {
        let err = Error::Authentication { algorithm: "GCM" };
        let public: api::Error = err.into();
        assert!(matches!(
            public,
            api::Error::AuthenticationFailed { context: "GCM" }
        ));
    }
}
