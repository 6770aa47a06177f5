//! Authentication tag type

use core::fmt;

use super::sealed::Sealed;
use crate::error::{validate, Result};
use internal::constant_time::ct_eq;

/// An authentication tag of `N` bytes.
///
/// Comparison runs in constant time. Both AEAD modes in this crate emit
/// full-width 128-bit tags.
#[derive(Clone)]
pub struct Tag<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Tag<N> {
    /// Wrap an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Copy from a slice, rejecting any length other than `N`
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Tag::from_slice", slice.len(), N)?;
        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        N
    }

    /// True only for the degenerate zero-size tag
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// View as a byte slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsRef<[u8]> for Tag<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> PartialEq for Tag<N> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.data, other.data)
    }
}

impl<const N: usize> Eq for Tag<N> {}

impl<const N: usize> fmt::Debug for Tag<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag<{}>(", N)?;
        for byte in &self.data {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl<const N: usize> Sealed for Tag<N> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_content() {
        let a = Tag::<16>::new([7u8; 16]);
        let b = Tag::<16>::from_slice(&[7u8; 16]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn from_slice_rejects_truncation() {
        assert!(Tag::<16>::from_slice(&[0u8; 12]).is_err());
    }
}
