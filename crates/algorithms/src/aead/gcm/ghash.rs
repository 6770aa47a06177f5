//! GHASH universal hash over GF(2^128) (SP 800-38D)
//!
//! Multiplication is bit-serial with masked conditionals, so no
//! secret-dependent branch or table index exists. Slow and flat.

use byteorder::{BigEndian, ByteOrder};

const BLOCK_SIZE: usize = 16;

/// Multiply two field elements, MSB-first, reducing by R = 0xE1 << 120
pub(super) fn gf_multiply(x: &[u8; BLOCK_SIZE], y: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut z = [0u8; BLOCK_SIZE];
    let mut v = *y;

    for bit in 0..128 {
        let x_bit = (x[bit / 8] >> (7 - bit % 8)) & 1;
        let mask = x_bit.wrapping_neg();
        for i in 0..BLOCK_SIZE {
            z[i] ^= v[i] & mask;
        }

        let lsb_mask = (v[BLOCK_SIZE - 1] & 1).wrapping_neg();
        let mut carry = 0u8;
        for byte in v.iter_mut() {
            let next_carry = *byte & 1;
            *byte = (*byte >> 1) | (carry << 7);
            carry = next_carry;
        }
        v[0] ^= lsb_mask & 0xe1;
    }

    z
}

/// GHASH keyed by the hash subkey H = E_K(0^128)
pub(super) struct GHash {
    h: [u8; BLOCK_SIZE],
}

impl GHash {
    pub fn new(h: [u8; BLOCK_SIZE]) -> Self {
        Self { h }
    }

    /// Absorb `data` in 16-byte blocks, zero-padding the last
    fn fold(&self, acc: &mut [u8; BLOCK_SIZE], data: &[u8]) {
        for chunk in data.chunks(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block[..chunk.len()].copy_from_slice(chunk);
            for i in 0..BLOCK_SIZE {
                acc[i] ^= block[i];
            }
            *acc = gf_multiply(acc, &self.h);
        }
    }

    /// GHASH(H, A, C): padded AAD, padded ciphertext, then the length block
    pub fn authenticate(&self, aad: &[u8], ciphertext: &[u8]) -> [u8; BLOCK_SIZE] {
        let mut acc = [0u8; BLOCK_SIZE];
        self.fold(&mut acc, aad);
        self.fold(&mut acc, ciphertext);

        let mut lengths = [0u8; BLOCK_SIZE];
        BigEndian::write_u64(&mut lengths[..8], (aad.len() as u64) * 8);
        BigEndian::write_u64(&mut lengths[8..], (ciphertext.len() as u64) * 8);
        self.fold(&mut acc, &lengths);

        acc
    }

    /// Derive the pre-counter block for an IV that is not 96 bits:
    /// J0 = GHASH(H, {}, IV) per SP 800-38D step 2, i.e. padded IV followed
    /// by a length block carrying only the IV bit length.
    pub fn derive_j0(&self, iv: &[u8]) -> [u8; BLOCK_SIZE] {
        let mut acc = [0u8; BLOCK_SIZE];
        self.fold(&mut acc, iv);

        let mut lengths = [0u8; BLOCK_SIZE];
        BigEndian::write_u64(&mut lengths[8..], (iv.len() as u64) * 8);
        self.fold(&mut acc, &lengths);

        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(s: &str) -> [u8; 16] {
        let mut b = [0u8; 16];
        b.copy_from_slice(&hex::decode(s).unwrap());
        b
    }

    #[test]
    fn multiply_by_zero_is_zero() {
        let h = block("66e94bd4ef8a2c3b884cfa59ca342b2e");
        assert_eq!(gf_multiply(&[0u8; 16], &h), [0u8; 16]);
    }

    // SP 800-38D test case 2 intermediate: GHASH over one zero ciphertext
    // block with H = AES_0(0) gives the documented value.
    #[test]
    fn ghash_single_zero_block() {
        let h = block("66e94bd4ef8a2c3b884cfa59ca342b2e");
        let ghash = GHash::new(h);
        let out = ghash.authenticate(&[], &hex::decode("0388dace60b6a392f328c2b971b2fe78").unwrap());
        assert_eq!(hex::encode(out), "f38cbb1ad69223dcc3457ae5b6b0f885");
    }

    #[test]
    fn multiply_is_commutative() {
        let a = block("952b2a56a5604ac0b32b6656a05b40b6");
        let b = block("dfa6bf4ded81db03ffcaff95f830f061");
        assert_eq!(gf_multiply(&a, &b), gf_multiply(&b, &a));
    }
}
