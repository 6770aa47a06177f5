//! Stream cipher capability trait

/// A keyed, positioned keystream applied to data in place.
///
/// Implementations are stateful: each call continues the keystream where the
/// previous call left off, so splitting one message across several calls
/// yields the same bytes as a single call. For the counter modes in this
/// crate encrypt and decrypt are the same XOR; both names exist so call
/// sites say what they mean.
pub trait StreamCipher {
    /// Encrypt data in place, advancing the keystream position
    fn encrypt(&mut self, data: &mut [u8]);

    /// Decrypt data in place, advancing the keystream position
    fn decrypt(&mut self, data: &mut [u8]);
}
