//! OCB3 authenticated encryption over any 128-bit block cipher (RFC 7253)
//!
//! Generic like [`Gcm`](crate::aead::gcm::Gcm): the composer owns its block
//! cipher and AES is never mentioned here. Always the full 128-bit tag.
//!
//! Setup computes the mask ladder (`L_*`, `L_$`, the doubling table) and the
//! nonce-derived initial offset once, so per-message work is one block
//! cipher call per 16 bytes plus one per AAD block. Unlike GCM the decrypt
//! path runs the inverse permutation, which is why [`BlockCipher`] carries
//! `decrypt_block` at all.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::aead::AeadCipher;
use crate::block::BlockCipher;
use crate::error::{validate, Result};
use crate::types::{Nonce, OcbCompatible, Tag};
use params::symmetric::{AES_BLOCK_SIZE, OCB_NONCE_SIZE, OCB_TAG_SIZE};

/// Mask table depth; bounds messages to 2^32 - 1 full blocks
const L_TABLE_LEN: usize = 32;

/// Largest number of 16-byte blocks one message may span
const MAX_MESSAGE_BLOCKS: u64 = u32::MAX as u64;

fn xor_in_place(block: &mut [u8; AES_BLOCK_SIZE], mask: &[u8; AES_BLOCK_SIZE]) {
    for i in 0..AES_BLOCK_SIZE {
        block[i] ^= mask[i];
    }
}

/// Doubling in GF(2^128) with the OCB polynomial x^128 + x^7 + x^2 + x + 1
fn double(block: &[u8; AES_BLOCK_SIZE]) -> [u8; AES_BLOCK_SIZE] {
    let carry = block[0] >> 7;
    let mut out = [0u8; AES_BLOCK_SIZE];
    for i in 0..AES_BLOCK_SIZE - 1 {
        out[i] = (block[i] << 1) | (block[i + 1] >> 7);
    }
    out[AES_BLOCK_SIZE - 1] = (block[AES_BLOCK_SIZE - 1] << 1) ^ (carry * 0x87);
    out
}

fn ntz(i: u64) -> usize {
    i.trailing_zeros() as usize
}

fn message_fits(context: &'static str, len: usize) -> Result<()> {
    validate::parameter(
        (len as u64) / (AES_BLOCK_SIZE as u64) <= MAX_MESSAGE_BLOCKS,
        context,
        "exceeds the OCB message length bound",
    )
}

/// OCB3 instance bound to one key and one nonce.
///
/// As with GCM, one instance serves one message; nonce reuse under a key
/// forfeits both confidentiality and authenticity.
#[derive(Clone, Zeroize)]
pub struct Ocb<B>
where
    B: BlockCipher<Block = [u8; AES_BLOCK_SIZE]> + Clone + Zeroize,
{
    cipher: B,
    l_star: [u8; AES_BLOCK_SIZE],
    l_dollar: [u8; AES_BLOCK_SIZE],
    l: [[u8; AES_BLOCK_SIZE]; L_TABLE_LEN],
    offset0: [u8; AES_BLOCK_SIZE],
}

impl<B> Ocb<B>
where
    B: BlockCipher<Block = [u8; AES_BLOCK_SIZE]> + Clone + Zeroize,
{
    const ALGORITHM_NAME: &'static str = "OCB";

    /// Compose over `cipher` for one nonce
    pub fn new<const N: usize>(cipher: B, nonce: &Nonce<N>) -> Self
    where
        Nonce<N>: OcbCompatible,
    {
        let mut l_star = [0u8; AES_BLOCK_SIZE];
        cipher.encrypt_block(&mut l_star);
        let l_dollar = double(&l_star);

        let mut l = [[0u8; AES_BLOCK_SIZE]; L_TABLE_LEN];
        l[0] = double(&l_dollar);
        for i in 1..L_TABLE_LEN {
            l[i] = double(&l[i - 1]);
        }

        let offset0 = Self::initial_offset(&cipher, nonce.as_ref());

        Self {
            cipher,
            l_star,
            l_dollar,
            l,
            offset0,
        }
    }

    /// RFC 7253 section 4.2 nonce processing for the full-width tag
    fn initial_offset(cipher: &B, nonce: &[u8]) -> [u8; AES_BLOCK_SIZE] {
        let mut nonce_block = [0u8; AES_BLOCK_SIZE];
        nonce_block[AES_BLOCK_SIZE - nonce.len()..].copy_from_slice(nonce);
        nonce_block[AES_BLOCK_SIZE - nonce.len() - 1] |= 0x01;
        // Tag length field; zero when the tag fills the whole block
        nonce_block[0] |= (((8 * OCB_TAG_SIZE) % 128) << 1) as u8;

        let bottom = (nonce_block[AES_BLOCK_SIZE - 1] & 0x3F) as usize;
        let mut ktop = nonce_block;
        ktop[AES_BLOCK_SIZE - 1] &= 0xC0;
        cipher.encrypt_block(&mut ktop);

        let mut stretch = [0u8; 24];
        stretch[..AES_BLOCK_SIZE].copy_from_slice(&ktop);
        for i in 0..8 {
            stretch[AES_BLOCK_SIZE + i] = ktop[i] ^ ktop[i + 1];
        }

        // Offset_0 is bits bottom..bottom+128 of the stretch. `bottom` is
        // derived from the public nonce, so the shift may branch.
        let skip = bottom / 8;
        let shift = (bottom % 8) as u32;
        let mut offset = [0u8; AES_BLOCK_SIZE];
        if shift == 0 {
            offset.copy_from_slice(&stretch[skip..skip + AES_BLOCK_SIZE]);
        } else {
            for i in 0..AES_BLOCK_SIZE {
                offset[i] = (stretch[skip + i] << shift) | (stretch[skip + i + 1] >> (8 - shift));
            }
        }
        offset
    }

    /// HASH(K, A) from RFC 7253 section 4.1
    fn hash_aad(&self, aad: &[u8]) -> Result<[u8; AES_BLOCK_SIZE]> {
        message_fits("OCB associated data", aad.len())?;

        let mut sum = [0u8; AES_BLOCK_SIZE];
        let mut offset = [0u8; AES_BLOCK_SIZE];
        let full = aad.len() / AES_BLOCK_SIZE;
        let rem = aad.len() % AES_BLOCK_SIZE;

        for i in 1..=full as u64 {
            xor_in_place(&mut offset, &self.l[ntz(i)]);
            let mut block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(&aad[AES_BLOCK_SIZE * (i as usize - 1)..AES_BLOCK_SIZE * i as usize]);
            xor_in_place(&mut block, &offset);
            self.cipher.encrypt_block(&mut block);
            xor_in_place(&mut sum, &block);
        }

        if rem > 0 {
            xor_in_place(&mut offset, &self.l_star);
            let mut block = [0u8; AES_BLOCK_SIZE];
            block[..rem].copy_from_slice(&aad[AES_BLOCK_SIZE * full..]);
            block[rem] = 0x80;
            xor_in_place(&mut block, &offset);
            self.cipher.encrypt_block(&mut block);
            xor_in_place(&mut sum, &block);
        }

        Ok(sum)
    }

    /// Encrypt and authenticate, returning `ciphertext || tag`
    pub fn internal_encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        message_fits("OCB plaintext", plaintext.len())?;
        let aad_hash = self.hash_aad(aad.unwrap_or(&[]))?;

        let full = plaintext.len() / AES_BLOCK_SIZE;
        let rem = plaintext.len() % AES_BLOCK_SIZE;

        let mut offset = self.offset0;
        let mut checksum = [0u8; AES_BLOCK_SIZE];
        let mut output = Vec::with_capacity(plaintext.len() + OCB_TAG_SIZE);

        for i in 1..=full as u64 {
            let mut block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(
                &plaintext[AES_BLOCK_SIZE * (i as usize - 1)..AES_BLOCK_SIZE * i as usize],
            );
            xor_in_place(&mut checksum, &block);

            xor_in_place(&mut offset, &self.l[ntz(i)]);
            xor_in_place(&mut block, &offset);
            self.cipher.encrypt_block(&mut block);
            xor_in_place(&mut block, &offset);
            output.extend_from_slice(&block);
        }

        if rem > 0 {
            xor_in_place(&mut offset, &self.l_star);
            let mut pad = offset;
            self.cipher.encrypt_block(&mut pad);

            let tail = &plaintext[AES_BLOCK_SIZE * full..];
            for (j, &byte) in tail.iter().enumerate() {
                output.push(byte ^ pad[j]);
                checksum[j] ^= byte;
            }
            checksum[rem] ^= 0x80;
        }

        let mut tag = checksum;
        xor_in_place(&mut tag, &offset);
        xor_in_place(&mut tag, &self.l_dollar);
        self.cipher.encrypt_block(&mut tag);
        xor_in_place(&mut tag, &aad_hash);

        output.extend_from_slice(&tag);
        Ok(output)
    }

    /// Verify and decrypt `ciphertext || tag`
    pub fn internal_decrypt(&self, ciphertext_and_tag: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        validate::min_length("OCB ciphertext", ciphertext_and_tag.len(), OCB_TAG_SIZE)?;
        message_fits("OCB ciphertext", ciphertext_and_tag.len())?;
        let aad_hash = self.hash_aad(aad.unwrap_or(&[]))?;

        let split = ciphertext_and_tag.len() - OCB_TAG_SIZE;
        let (ciphertext, received_tag) = ciphertext_and_tag.split_at(split);

        let full = ciphertext.len() / AES_BLOCK_SIZE;
        let rem = ciphertext.len() % AES_BLOCK_SIZE;

        let mut offset = self.offset0;
        let mut checksum = [0u8; AES_BLOCK_SIZE];
        let mut plaintext = Vec::with_capacity(ciphertext.len());

        for i in 1..=full as u64 {
            let mut block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(
                &ciphertext[AES_BLOCK_SIZE * (i as usize - 1)..AES_BLOCK_SIZE * i as usize],
            );

            xor_in_place(&mut offset, &self.l[ntz(i)]);
            xor_in_place(&mut block, &offset);
            self.cipher.decrypt_block(&mut block);
            xor_in_place(&mut block, &offset);

            xor_in_place(&mut checksum, &block);
            plaintext.extend_from_slice(&block);
        }

        if rem > 0 {
            xor_in_place(&mut offset, &self.l_star);
            let mut pad = offset;
            self.cipher.encrypt_block(&mut pad);

            let tail = &ciphertext[AES_BLOCK_SIZE * full..];
            for (j, &byte) in tail.iter().enumerate() {
                let recovered = byte ^ pad[j];
                plaintext.push(recovered);
                checksum[j] ^= recovered;
            }
            checksum[rem] ^= 0x80;
        }

        let mut tag_block = checksum;
        xor_in_place(&mut tag_block, &offset);
        xor_in_place(&mut tag_block, &self.l_dollar);
        self.cipher.encrypt_block(&mut tag_block);
        xor_in_place(&mut tag_block, &aad_hash);
        let expected_tag = Tag::<OCB_TAG_SIZE>::new(tag_block);

        let tag_ok = expected_tag.as_bytes().ct_eq(received_tag);

        // Same release discipline as GCM: mask unless the tag verified.
        let mask = u8::from(tag_ok.unwrap_u8() == 1).wrapping_neg();
        for byte in plaintext.iter_mut() {
            *byte &= mask;
        }

        validate::authentication(tag_ok.unwrap_u8() == 1, Self::ALGORITHM_NAME)?;
        Ok(plaintext)
    }
}

impl<B> AeadCipher for Ocb<B>
where
    B: BlockCipher<Block = [u8; AES_BLOCK_SIZE]> + Clone + Zeroize,
{
    const KEY_SIZE: usize = B::KEY_SIZE;
    const NONCE_SIZE: usize = OCB_NONCE_SIZE;
    const TAG_SIZE: usize = OCB_TAG_SIZE;

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

#[cfg(test)]
mod tests;
