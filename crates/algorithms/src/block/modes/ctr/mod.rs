//! CTR mode keystream over any 128-bit block cipher (SP 800-38A)
//!
//! The composer owns its cipher. The counter occupies the last four bytes of
//! the counter block, big-endian, incremented modulo 2^32 after each
//! keystream block; the nonce fills the block from the front. GCM builds on
//! this by seeding the full counter block itself.

use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{BlockCipher, NonceGenerator};
use crate::stream::StreamCipher;
use crate::types::{CtrCompatible, Nonce};
use params::symmetric::AES_BLOCK_SIZE;

/// Increment the trailing 32-bit counter of a block, wrapping on overflow
pub(crate) fn inc32(block: &mut [u8; AES_BLOCK_SIZE]) {
    let counter = BigEndian::read_u32(&block[12..]).wrapping_add(1);
    BigEndian::write_u32(&mut block[12..], counter);
}

/// CTR keystream generator owning its block cipher.
///
/// Stateful: every call continues where the previous one stopped, so a
/// message may be processed in arbitrary slices.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ctr<B: BlockCipher<Block = [u8; AES_BLOCK_SIZE]> + Zeroize> {
    cipher: B,
    counter_block: [u8; AES_BLOCK_SIZE],
    keystream: [u8; AES_BLOCK_SIZE],
    used: usize,
}

impl<B: BlockCipher<Block = [u8; AES_BLOCK_SIZE]> + Zeroize> Ctr<B> {
    /// Compose over `cipher` with the nonce ahead of a zero counter
    pub fn new<const N: usize>(cipher: B, nonce: &Nonce<N>) -> Self
    where
        Nonce<N>: CtrCompatible,
    {
        let mut counter_block = [0u8; AES_BLOCK_SIZE];
        counter_block[..N].copy_from_slice(nonce.as_ref());
        Self::with_initial_block(cipher, counter_block)
    }

    /// Compose over `cipher` starting from a fully formed counter block
    pub fn with_initial_block(cipher: B, counter_block: [u8; AES_BLOCK_SIZE]) -> Self {
        Self {
            cipher,
            counter_block,
            keystream: [0u8; AES_BLOCK_SIZE],
            used: AES_BLOCK_SIZE,
        }
    }

    fn refill(&mut self) {
        self.keystream = self.counter_block;
        self.cipher.encrypt_block(&mut self.keystream);
        inc32(&mut self.counter_block);
        self.used = 0;
    }

    /// XOR the keystream into `data`, advancing the position
    pub fn process(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            if self.used == AES_BLOCK_SIZE {
                self.refill();
            }
            *byte ^= self.keystream[self.used];
            self.used += 1;
        }
    }
}

impl<B: BlockCipher<Block = [u8; AES_BLOCK_SIZE]> + Zeroize> StreamCipher for Ctr<B> {
    fn encrypt(&mut self, data: &mut [u8]) {
        self.process(data);
    }

    fn decrypt(&mut self, data: &mut [u8]) {
        self.process(data);
    }
}

// Not a block cipher algorithm itself, so the blanket grant does not reach
// it; the capability is declared directly.
impl<B: BlockCipher<Block = [u8; AES_BLOCK_SIZE]> + Zeroize> NonceGenerator for Ctr<B> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::aes::Aes128;
    use crate::block::BlockCipher;
    use crate::types::SecretBytes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sp800_38a_cipher() -> Aes128 {
        let key = SecretBytes::<16>::from_slice(
            &hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap(),
        )
        .unwrap();
        Aes128::new(&key)
    }

    fn sp800_38a_counter() -> [u8; 16] {
        let mut block = [0u8; 16];
        block.copy_from_slice(&hex::decode("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff").unwrap());
        block
    }

    // SP 800-38A F.5.1, first two blocks
    #[test]
    fn ctr_aes128_known_answer() {
        let mut ctr = Ctr::with_initial_block(sp800_38a_cipher(), sp800_38a_counter());
        let mut data = hex::decode(
            "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51",
        )
        .unwrap();
        ctr.process(&mut data);
        assert_eq!(
            hex::encode(&data),
            "874d6191b620e3261bef6864990db6ce9806f66b7970fdff8617187bb9fffdff"
        );
    }

    #[test]
    fn split_calls_match_one_shot() {
        let mut message = [0u8; 45];
        for (i, byte) in message.iter_mut().enumerate() {
            *byte = i as u8;
        }

        let mut one_shot = message;
        let mut ctr = Ctr::with_initial_block(sp800_38a_cipher(), sp800_38a_counter());
        ctr.process(&mut one_shot);

        let mut split = message;
        let mut ctr = Ctr::with_initial_block(sp800_38a_cipher(), sp800_38a_counter());
        let (head, tail) = split.split_at_mut(5);
        ctr.process(head);
        ctr.process(tail);

        assert_eq!(one_shot, split);
    }

    #[test]
    fn stream_round_trip_with_nonce() {
        let mut rng = StdRng::seed_from_u64(9);
        let nonce = Ctr::<Aes128>::generate_nonce::<12, _>(&mut rng);
        let key = Aes128::generate_key(&mut rng);

        let original = b"counter mode keeps no alignment requirements".to_vec();
        let mut data = original.clone();

        let mut enc = Ctr::new(Aes128::new(&key), &nonce);
        enc.encrypt(&mut data);
        assert_ne!(data, original);

        let mut dec = Ctr::new(Aes128::new(&key), &nonce);
        dec.decrypt(&mut data);
        assert_eq!(data, original);
    }
}
