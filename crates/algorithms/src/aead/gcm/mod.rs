//! Galois/Counter Mode over any 128-bit block cipher (SP 800-38D)
//!
//! `Gcm` is generic over the block cipher it owns; AES never appears in this
//! file. Construction derives the hash subkey and the pre-counter block, so
//! each encrypt or decrypt only pays for the CTR pass and the GHASH pass.
//!
//! Decryption verifies before releasing anything: the candidate plaintext is
//! produced unconditionally, then masked to zeros unless the tag comparison
//! (constant-time) succeeded.

mod ghash;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use self::ghash::GHash;
use crate::aead::AeadCipher;
use crate::block::modes::ctr::{inc32, Ctr};
use crate::block::BlockCipher;
use crate::error::{validate, Result};
use crate::types::{GcmCompatible, Nonce, Tag};
use params::symmetric::{AES_BLOCK_SIZE, GCM_NONCE_SIZE, GCM_TAG_SIZE};

/// Largest number of 16-byte blocks one message may span (SP 800-38D
/// section 5.2.1.1); one more block would wrap the 32-bit counter
const MAX_MESSAGE_BLOCKS: u64 = (1 << 32) - 2;

fn message_fits(context: &'static str, len: usize) -> Result<()> {
    validate::parameter(
        (len as u64) <= MAX_MESSAGE_BLOCKS * AES_BLOCK_SIZE as u64,
        context,
        "exceeds the GCM message length bound",
    )
}

/// GCM instance bound to one key and one nonce.
///
/// Owns its block cipher. Encrypting two messages with one instance would
/// reuse the counter stream, so callers construct per message.
#[derive(Clone, Zeroize)]
pub struct Gcm<B>
where
    B: BlockCipher<Block = [u8; AES_BLOCK_SIZE]> + Clone + Zeroize,
{
    cipher: B,
    h: [u8; AES_BLOCK_SIZE],
    j0: [u8; AES_BLOCK_SIZE],
}

impl<B> Gcm<B>
where
    B: BlockCipher<Block = [u8; AES_BLOCK_SIZE]> + Clone + Zeroize,
{
    /// Compose over `cipher` for one nonce.
    ///
    /// A 96-bit nonce forms the pre-counter block directly; a 128-bit nonce
    /// is run through GHASH as SP 800-38D specifies for other lengths.
    pub fn new<const N: usize>(cipher: B, nonce: &Nonce<N>) -> Self
    where
        Nonce<N>: GcmCompatible,
    {
        let mut h = [0u8; AES_BLOCK_SIZE];
        cipher.encrypt_block(&mut h);

        let j0 = if N == GCM_NONCE_SIZE {
            let mut block = [0u8; AES_BLOCK_SIZE];
            block[..GCM_NONCE_SIZE].copy_from_slice(nonce.as_ref());
            block[AES_BLOCK_SIZE - 1] = 1;
            block
        } else {
            GHash::new(h).derive_j0(nonce.as_ref())
        };

        Self { cipher, h, j0 }
    }

    fn keystream_from(&self, counter_block: [u8; AES_BLOCK_SIZE]) -> Ctr<B> {
        Ctr::with_initial_block(self.cipher.clone(), counter_block)
    }

    fn tag(&self, aad: &[u8], ciphertext: &[u8]) -> Tag<GCM_TAG_SIZE> {
        let mut tag = GHash::new(self.h).authenticate(aad, ciphertext);
        let mut masked_j0 = self.j0;
        self.cipher.encrypt_block(&mut masked_j0);
        for i in 0..GCM_TAG_SIZE {
            tag[i] ^= masked_j0[i];
        }
        masked_j0.zeroize();
        Tag::new(tag)
    }

    /// Encrypt and authenticate, returning `ciphertext || tag`
    pub fn internal_encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        message_fits("GCM plaintext", plaintext.len())?;
        let aad = aad.unwrap_or(&[]);

        let mut first_counter = self.j0;
        inc32(&mut first_counter);

        let mut output = Vec::with_capacity(plaintext.len() + GCM_TAG_SIZE);
        output.extend_from_slice(plaintext);
        self.keystream_from(first_counter).process(&mut output);

        let tag = self.tag(aad, &output);
        output.extend_from_slice(tag.as_bytes());
        Ok(output)
    }

    /// Verify and decrypt `ciphertext || tag`
    pub fn internal_decrypt(&self, ciphertext_and_tag: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        let aad = aad.unwrap_or(&[]);
        validate::min_length("GCM ciphertext", ciphertext_and_tag.len(), GCM_TAG_SIZE)?;

        let split = ciphertext_and_tag.len() - GCM_TAG_SIZE;
        let (ciphertext, received_tag) = ciphertext_and_tag.split_at(split);
        message_fits("GCM ciphertext", ciphertext.len())?;

        let expected_tag = self.tag(aad, ciphertext);
        let tag_ok = expected_tag.as_bytes().ct_eq(received_tag);

        let mut first_counter = self.j0;
        inc32(&mut first_counter);

        let mut plaintext = ciphertext.to_vec();
        self.keystream_from(first_counter).process(&mut plaintext);

        // Produce the plaintext either way, release it only on success.
        let mask = u8::from(tag_ok.unwrap_u8() == 1).wrapping_neg();
        for byte in plaintext.iter_mut() {
            *byte &= mask;
        }

        validate::authentication(tag_ok.unwrap_u8() == 1, Self::ALGORITHM_NAME)?;
        Ok(plaintext)
    }

    const ALGORITHM_NAME: &'static str = "GCM";
}

impl<B> AeadCipher for Gcm<B>
where
    B: BlockCipher<Block = [u8; AES_BLOCK_SIZE]> + Clone + Zeroize,
{
    const KEY_SIZE: usize = B::KEY_SIZE;
    const NONCE_SIZE: usize = GCM_NONCE_SIZE;
    const TAG_SIZE: usize = GCM_TAG_SIZE;

    fn algorithm() -> &'static str {
        Self::ALGORITHM_NAME
    }

    fn encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        self.internal_encrypt(plaintext, aad)
    }

    fn decrypt(&self, ciphertext_and_tag: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        self.internal_decrypt(ciphertext_and_tag, aad)
    }
}
