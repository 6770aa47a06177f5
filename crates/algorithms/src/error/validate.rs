//! Validation helpers shared by the primitives and composers
//!
//! Each helper returns the primitive-layer [`Error`](super::Error) directly
//! so call sites read as one-line preconditions.

use super::{Error, Result};

/// Require an exact buffer length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            needed: expected,
            got: actual,
        });
    }
    Ok(())
}

/// Require a minimum buffer length
pub fn min_length(context: &'static str, actual: usize, minimum: usize) -> Result<()> {
    if actual < minimum {
        return Err(Error::Length {
            context,
            needed: minimum,
            got: actual,
        });
    }
    Ok(())
}

/// Require a maximum buffer length
pub fn max_length(context: &'static str, actual: usize, maximum: usize) -> Result<()> {
    if actual > maximum {
        return Err(Error::Length {
            context,
            needed: maximum,
            got: actual,
        });
    }
    Ok(())
}

/// Require an arbitrary parameter predicate to hold
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Parameter { name, reason });
    }
    Ok(())
}

/// Require a passed authentication check
pub fn authentication(passed: bool, algorithm: &'static str) -> Result<()> {
    if !passed {
        return Err(Error::Authentication { algorithm });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_length_accepts_and_rejects() {
        assert!(length("block", 16, 16).is_ok());
        assert!(length("block", 15, 16).is_err());
    }

    #[test]
    fn min_length_is_inclusive() {
        assert!(min_length("ciphertext", 16, 16).is_ok());
        assert!(min_length("ciphertext", 15, 16).is_err());
    }

    #[test]
    fn failed_authentication_names_the_algorithm() {
        let err = authentication(false, "OCB").unwrap_err();
        assert!(matches!(err, Error::Authentication { algorithm: "OCB" }));
    }
}
