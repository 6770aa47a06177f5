//! Fixed-size secret storage with guaranteed zeroization

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Types that can produce a zeroed instance and clone without weakening
/// their zeroization guarantees.
pub trait SecureZeroingType: Zeroize + Clone {
    /// Create a zeroed instance
    fn zeroed() -> Self;

    /// Clone while preserving the security properties of the original
    fn secure_clone(&self) -> Self {
        self.clone()
    }
}

/// A fixed-size buffer for secret material.
///
/// The contents are wiped on drop and never appear in `Debug` output. The
/// size is part of the type, so an expanded AES key schedule cannot be
/// confused with a raw key at compile time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Take ownership of the given bytes
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// A buffer of all zeros
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        N
    }

    /// True only for the degenerate zero-size buffer
    pub fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> SecureZeroingType for SecretBuffer<N> {
    fn zeroed() -> Self {
        Self::zeroed()
    }

    fn secure_clone(&self) -> Self {
        Self::new(self.data)
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for SecretBuffer<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> PartialEq for SecretBuffer<N> {
    fn eq(&self, other: &Self) -> bool {
        internal::constant_time::ct_eq(&self.data, &other.data)
    }
}

impl<const N: usize> Eq for SecretBuffer<N> {}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_contents() {
        let buf = SecretBuffer::new([0xAB; 4]);
        let rendered = format!("{:?}", buf);
        assert!(!rendered.contains("ab"));
        assert!(!rendered.contains("171"));
    }

    #[test]
    fn equality_is_by_content() {
        assert_eq!(SecretBuffer::new([1u8; 8]), SecretBuffer::new([1u8; 8]));
        assert_ne!(SecretBuffer::new([1u8; 8]), SecretBuffer::new([2u8; 8]));
    }
}
