//! Constant-time comparison and selection helpers
//!
//! Tag verification and secret comparison must not leak where two buffers
//! diverge. These helpers wrap `subtle` so the rest of the workspace never
//! writes `==` on secret bytes by accident.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Compare two byte slices in constant time.
///
/// The comparison touches every byte of both inputs whatever the outcome.
/// Slices of different lengths compare unequal; the length itself is public.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    bool::from(ct_eq_choice(a, b))
}

/// Constant-time slice comparison returning a `subtle::Choice`.
///
/// Useful when the result feeds further branch-free arithmetic, such as the
/// plaintext masking done on AEAD decrypt failure.
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Copy `src` into `dst` only when `condition` holds, in constant time.
///
/// Both slices must have the same length.
pub fn ct_assign(dst: &mut [u8], src: &[u8], condition: bool) {
    assert_eq!(dst.len(), src.len());

    let choice = Choice::from(condition as u8);
    for (d, s) in dst.iter_mut().zip(src) {
        *d = u8::conditional_select(d, s, choice);
    }
}

/// Constant-time equality for any byte-viewable type.
///
/// This is granted structurally: every type that exposes its bytes through
/// `AsRef<[u8]>` acquires the capability without declaring it.
pub trait ConstantTimeEquals {
    /// Compare two values in constant time
    fn ct_equals(&self, other: &Self) -> bool;
}

impl<T: AsRef<[u8]>> ConstantTimeEquals for T {
    fn ct_equals(&self, other: &Self) -> bool {
        ct_eq(self.as_ref(), other.as_ref())
    }
}
