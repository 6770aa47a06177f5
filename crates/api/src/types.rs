//! Secret byte containers with compile-time and runtime guarantees

use core::fmt;
use core::ops::{Deref, DerefMut};

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use internal::constant_time::ct_eq;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{vec, vec::Vec};

/// A fixed-size array of secret bytes.
///
/// The size is a const generic, so a 16-byte key and a 32-byte key are
/// different types and cannot be swapped by accident. Contents are zeroed
/// on drop, compared in constant time, and redacted in `Debug` output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBytes<N> {
    /// Take ownership of an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Copy from a slice, rejecting any length other than `N`
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != N {
            return Err(Error::InvalidLength {
                context: "SecretBytes::from_slice",
                expected: N,
                actual: slice.len(),
            });
        }

        let mut data = [0u8; N];
        data.copy_from_slice(slice);

        Ok(Self { data })
    }

    /// An all-zero instance
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Fill a fresh instance from the given entropy source
    pub fn random<R: rand::RngCore + rand::CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; N];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        N
    }

    /// True only for the degenerate zero-size container
    pub fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for SecretBytes<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> Deref for SecretBytes<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> DerefMut for SecretBytes<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<const N: usize> PartialEq for SecretBytes<N> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.data, other.data)
    }
}

impl<const N: usize> Eq for SecretBytes<N> {}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{}>[REDACTED]", N)
    }
}

/// A variable-length vector of secret bytes, zeroed on drop.
///
/// Used where a size is resolved at runtime, such as the key material a
/// facade object generates for whichever suite its preset selected.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

impl SecretVec {
    /// Take ownership of an existing vector
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Copy from a slice
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// A zero-filled vector of the given length
    pub fn zeroed(len: usize) -> Self {
        Self {
            data: vec![0u8; len],
        }
    }

    /// Fill a fresh vector of the given length from the entropy source
    pub fn random<R: rand::RngCore + rand::CryptoRng>(rng: &mut R, len: usize) -> Self {
        let mut data = vec![0u8; len];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq for SecretVec {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.data, &other.data)
    }
}

impl Eq for SecretVec {}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec([REDACTED; {}])", self.data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn from_slice_enforces_exact_length() {
        assert!(SecretBytes::<16>::from_slice(&[0u8; 16]).is_ok());
        let err = SecretBytes::<16>::from_slice(&[0u8; 15]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidLength {
                expected: 16,
                actual: 15,
                ..
            }
        ));
    }

    #[test]
    fn random_instances_differ() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = SecretBytes::<32>::random(&mut rng);
        let b = SecretBytes::<32>::random(&mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn debug_never_prints_bytes() {
        let secret = SecretVec::from_slice(&[0xCC; 8]);
        assert_eq!(format!("{:?}", secret), "SecretVec([REDACTED; 8])");
    }
}
