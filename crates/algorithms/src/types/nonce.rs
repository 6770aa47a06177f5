//! Nonce type with mode compatibility enforced at compile time

use core::fmt;

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::sealed::Sealed;
use crate::error::{validate, Result};

/// A nonce of `N` bytes.
///
/// Nonces are not secret, but reuse under one key voids every security
/// property of the AEAD modes in this crate. Generation helpers draw from a
/// caller-supplied CSPRNG; deterministic schedules are the caller's job.
#[derive(Clone, Zeroize)]
pub struct Nonce<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Nonce<N> {
    /// Wrap an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// An all-zero nonce, for counter schedules that fill it in later
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Copy from a slice, rejecting any length other than `N`
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Nonce::from_slice", slice.len(), N)?;
        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Draw a fresh random nonce from the given entropy source
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; N];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        N
    }

    /// True only for the degenerate zero-size nonce
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// View as a byte slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsRef<[u8]> for Nonce<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for Nonce<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> PartialEq for Nonce<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<const N: usize> Eq for Nonce<N> {}

impl<const N: usize> fmt::Debug for Nonce<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce<{}>(", N)?;
        for byte in &self.data {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl<const N: usize> Sealed for Nonce<N> {}

/// Nonce lengths GCM accepts.
///
/// The 96-bit nonce is the fast path; a 128-bit nonce is routed through the
/// GHASH derivation of the pre-counter block as SP 800-38D specifies.
pub trait GcmCompatible: Sealed {}
impl GcmCompatible for Nonce<12> {}
impl GcmCompatible for Nonce<16> {}

/// Nonce lengths OCB accepts
pub trait OcbCompatible: Sealed {}
impl OcbCompatible for Nonce<12> {}

/// Nonce lengths the raw CTR keystream accepts.
///
/// Anything up to twelve bytes fits ahead of the 32-bit counter.
pub trait CtrCompatible: Sealed {}
impl CtrCompatible for Nonce<8> {}
impl CtrCompatible for Nonce<12> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn from_slice_enforces_exact_length() {
        assert!(Nonce::<12>::from_slice(&[0u8; 12]).is_ok());
        assert!(Nonce::<12>::from_slice(&[0u8; 11]).is_err());
    }

    #[test]
    fn random_nonces_differ() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = Nonce::<12>::random(&mut rng);
        let b = Nonce::<12>::random(&mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn debug_prints_hex() {
        let nonce = Nonce::<4>::new([0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(format!("{:?}", nonce), "Nonce<4>(deadbeef)");
    }
}
