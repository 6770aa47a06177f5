//! AES-128 and AES-256 block permutations (FIPS 197)
//!
//! This is a portable constant-time implementation. The S-box is computed
//! per byte from a branchless GF(2^8) inversion instead of a lookup table,
//! so no secret-indexed memory access exists anywhere on the data path.
//! That costs real throughput; it buys timing behavior independent of key
//! and plaintext on any hardware.
//!
//! Both key sizes share one key-expansion routine and one pair of round
//! drivers; the structs differ only in schedule length and round count.

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, BlockCipherAlgorithm};
use common::{barrier, SecretBuffer};
use params::symmetric::{
    AES128_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE, AES_PARALLEL_BLOCKS,
};

use crate::types::SecretBytes;

/// Round constants for key expansion
const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Multiply two elements of GF(2^8) without data-dependent branches
fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        let lsb_mask = (b & 1).wrapping_neg();
        product ^= a & lsb_mask;
        let carry_mask = ((a >> 7) & 1).wrapping_neg();
        a = (a << 1) ^ (carry_mask & 0x1b);
        b >>= 1;
    }
    product
}

/// Invert an element of GF(2^8) as x^254, mapping zero to zero
fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);

    // 254 = 0b1111_1110, so every square except x itself contributes
    let mut inv = gf_mul(x128, x64);
    inv = gf_mul(inv, x32);
    inv = gf_mul(inv, x16);
    inv = gf_mul(inv, x8);
    inv = gf_mul(inv, x4);
    gf_mul(inv, x2)
}

/// Forward S-box: inversion followed by the FIPS 197 affine transform
fn sbox(x: u8) -> u8 {
    let b = gf_inv(x);
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ 0x63
}

/// Inverse S-box: inverse affine transform followed by inversion
fn inv_sbox(x: u8) -> u8 {
    let b = x.rotate_left(1) ^ x.rotate_left(3) ^ x.rotate_left(6) ^ 0x05;
    gf_inv(b)
}

fn sub_bytes(state: &mut [u8; AES_BLOCK_SIZE]) {
    barrier::compiler_fence_seq_cst();
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
    barrier::compiler_fence_seq_cst();
}

fn inv_sub_bytes(state: &mut [u8; AES_BLOCK_SIZE]) {
    barrier::compiler_fence_seq_cst();
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
    barrier::compiler_fence_seq_cst();
}

// State layout is column-major: byte index = 4 * column + row.

fn shift_rows(state: &mut [u8; AES_BLOCK_SIZE]) {
    for row in 1..4 {
        let current = [
            state[row],
            state[row + 4],
            state[row + 8],
            state[row + 12],
        ];
        for col in 0..4 {
            state[row + 4 * col] = current[(col + row) % 4];
        }
    }
}

fn inv_shift_rows(state: &mut [u8; AES_BLOCK_SIZE]) {
    for row in 1..4 {
        let current = [
            state[row],
            state[row + 4],
            state[row + 8],
            state[row + 12],
        ];
        for col in 0..4 {
            state[row + 4 * col] = current[(col + 4 - row) % 4];
        }
    }
}

fn mix_columns(state: &mut [u8; AES_BLOCK_SIZE]) {
    for col in 0..4 {
        let base = 4 * col;
        let (a0, a1, a2, a3) = (state[base], state[base + 1], state[base + 2], state[base + 3]);
        state[base] = gf_mul(a0, 2) ^ gf_mul(a1, 3) ^ a2 ^ a3;
        state[base + 1] = a0 ^ gf_mul(a1, 2) ^ gf_mul(a2, 3) ^ a3;
        state[base + 2] = a0 ^ a1 ^ gf_mul(a2, 2) ^ gf_mul(a3, 3);
        state[base + 3] = gf_mul(a0, 3) ^ a1 ^ a2 ^ gf_mul(a3, 2);
    }
}

fn inv_mix_columns(state: &mut [u8; AES_BLOCK_SIZE]) {
    for col in 0..4 {
        let base = 4 * col;
        let (a0, a1, a2, a3) = (state[base], state[base + 1], state[base + 2], state[base + 3]);
        state[base] = gf_mul(a0, 14) ^ gf_mul(a1, 11) ^ gf_mul(a2, 13) ^ gf_mul(a3, 9);
        state[base + 1] = gf_mul(a0, 9) ^ gf_mul(a1, 14) ^ gf_mul(a2, 11) ^ gf_mul(a3, 13);
        state[base + 2] = gf_mul(a0, 13) ^ gf_mul(a1, 9) ^ gf_mul(a2, 14) ^ gf_mul(a3, 11);
        state[base + 3] = gf_mul(a0, 11) ^ gf_mul(a1, 13) ^ gf_mul(a2, 9) ^ gf_mul(a3, 14);
    }
}

fn add_round_key(state: &mut [u8; AES_BLOCK_SIZE], round_key: &[u8]) {
    for (byte, key_byte) in state.iter_mut().zip(round_key.iter()) {
        *byte ^= key_byte;
    }
}

fn word(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn sub_word(w: u32) -> u32 {
    let bytes = w.to_be_bytes();
    u32::from_be_bytes([sbox(bytes[0]), sbox(bytes[1]), sbox(bytes[2]), sbox(bytes[3])])
}

/// Expand a 16 or 32 byte key into the full round-key schedule.
///
/// `schedule` must hold `16 * (rounds + 1)` bytes; both callers size it with
/// a const generic buffer so the lengths are fixed at compile time.
fn expand_key(key: &[u8], schedule: &mut [u8]) {
    let nk = key.len() / 4;
    let total_words = schedule.len() / 4;

    // 60 words covers the largest schedule (AES-256)
    let mut words = [0u32; 60];
    for i in 0..nk {
        words[i] = word(&key[4 * i..]);
    }
    for i in nk..total_words {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            temp = sub_word(temp.rotate_left(8)) ^ ((RCON[i / nk - 1] as u32) << 24);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        words[i] = words[i - nk] ^ temp;
    }
    for i in 0..total_words {
        schedule[4 * i..4 * i + 4].copy_from_slice(&words[i].to_be_bytes());
    }
    words.zeroize();
}

fn encrypt_rounds(round_keys: &[u8], rounds: usize, block: &mut [u8; AES_BLOCK_SIZE]) {
    add_round_key(block, &round_keys[..16]);
    for round in 1..rounds {
        sub_bytes(block);
        shift_rows(block);
        mix_columns(block);
        add_round_key(block, &round_keys[16 * round..16 * round + 16]);
    }
    sub_bytes(block);
    shift_rows(block);
    add_round_key(block, &round_keys[16 * rounds..16 * rounds + 16]);
}

fn decrypt_rounds(round_keys: &[u8], rounds: usize, block: &mut [u8; AES_BLOCK_SIZE]) {
    add_round_key(block, &round_keys[16 * rounds..16 * rounds + 16]);
    for round in (1..rounds).rev() {
        inv_shift_rows(block);
        inv_sub_bytes(block);
        add_round_key(block, &round_keys[16 * round..16 * round + 16]);
        inv_mix_columns(block);
    }
    inv_shift_rows(block);
    inv_sub_bytes(block);
    add_round_key(block, &round_keys[..16]);
}

/// AES-128: 10 rounds, 176-byte schedule
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128 {
    round_keys: SecretBuffer<176>,
}

impl BlockCipherAlgorithm for Aes128 {
    const KEY_SIZE: usize = AES128_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-128"
    }
}

impl BlockCipher for Aes128 {
    type Key = SecretBytes<AES128_KEY_SIZE>;
    type Block = [u8; AES_BLOCK_SIZE];
    type ParBlocks = [[u8; AES_BLOCK_SIZE]; AES_PARALLEL_BLOCKS];

    const PARALLEL_BLOCKS: usize = AES_PARALLEL_BLOCKS;

    fn new(key: &Self::Key) -> Self {
        let mut round_keys = SecretBuffer::zeroed();
        expand_key(key.as_ref(), round_keys.as_mut());
        Self { round_keys }
    }

    fn encrypt_block(&self, block: &mut Self::Block) {
        encrypt_rounds(self.round_keys.as_ref(), 10, block);
    }

    fn decrypt_block(&self, block: &mut Self::Block) {
        decrypt_rounds(self.round_keys.as_ref(), 10, block);
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        SecretBytes::random(rng)
    }
}

/// AES-256: 14 rounds, 240-byte schedule
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    round_keys: SecretBuffer<240>,
}

impl BlockCipherAlgorithm for Aes256 {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }
}

impl BlockCipher for Aes256 {
    type Key = SecretBytes<AES256_KEY_SIZE>;
    type Block = [u8; AES_BLOCK_SIZE];
    type ParBlocks = [[u8; AES_BLOCK_SIZE]; AES_PARALLEL_BLOCKS];

    const PARALLEL_BLOCKS: usize = AES_PARALLEL_BLOCKS;

    fn new(key: &Self::Key) -> Self {
        let mut round_keys = SecretBuffer::zeroed();
        expand_key(key.as_ref(), round_keys.as_mut());
        Self { round_keys }
    }

    fn encrypt_block(&self, block: &mut Self::Block) {
        encrypt_rounds(self.round_keys.as_ref(), 14, block);
    }

    fn decrypt_block(&self, block: &mut Self::Block) {
        decrypt_rounds(self.round_keys.as_ref(), 14, block);
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        SecretBytes::random(rng)
    }
}

#[cfg(test)]
mod tests;
