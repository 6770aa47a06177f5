//! Block cipher capability traits
//!
//! [`BlockCipherAlgorithm`] is the static identity of an algorithm (its key
//! and block sizes, usable without a key). [`BlockCipher`] is the keyed
//! capability the mode composers consume. A cipher earns AEAD behavior by
//! being handed to a composer, never by reimplementing a mode.

use rand::{CryptoRng, RngCore};

use crate::types::Nonce;

pub mod aes;
pub mod modes;

/// Static identity of a block cipher algorithm.
///
/// Everything here is known without key material, which is what the preset
/// registry needs when it describes a suite before any key exists.
pub trait BlockCipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Human-readable algorithm name
    fn name() -> &'static str;
}

/// A keyed block cipher.
///
/// The block is a fixed-size array type, so feeding a half block to the
/// permutation is unrepresentable. `encrypt_blocks`/`decrypt_blocks` have
/// lane-by-lane default bodies; implementations with a wide data path
/// override them.
pub trait BlockCipher: BlockCipherAlgorithm + Sized {
    /// Key type, sized to [`BlockCipherAlgorithm::KEY_SIZE`]
    type Key;

    /// Block type, sized to [`BlockCipherAlgorithm::BLOCK_SIZE`]
    type Block: Copy + AsRef<[u8]> + AsMut<[u8]>;

    /// Batch of [`Self::PARALLEL_BLOCKS`] blocks processed as one unit
    type ParBlocks: AsRef<[Self::Block]> + AsMut<[Self::Block]>;

    /// Number of blocks in one batch
    const PARALLEL_BLOCKS: usize;

    /// Expand the key schedule.
    ///
    /// The key arrives pre-sized by its type, so construction cannot fail.
    fn new(key: &Self::Key) -> Self;

    /// Encrypt one block in place
    fn encrypt_block(&self, block: &mut Self::Block);

    /// Decrypt one block in place
    fn decrypt_block(&self, block: &mut Self::Block);

    /// Encrypt a batch of blocks in place
    fn encrypt_blocks(&self, blocks: &mut Self::ParBlocks) {
        for block in blocks.as_mut() {
            self.encrypt_block(block);
        }
    }

    /// Decrypt a batch of blocks in place
    fn decrypt_blocks(&self, blocks: &mut Self::ParBlocks) {
        for block in blocks.as_mut() {
            self.decrypt_block(block);
        }
    }

    /// Draw a fresh key from the given entropy source
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;
}

/// Random nonce generation, granted wherever an algorithm identity exists.
///
/// The blanket impl covers every block cipher algorithm. Stream ciphers opt
/// in with an empty `impl NonceGenerator for ...` per type, as
/// [`modes::ctr::Ctr`] does: a second blanket over
/// [`StreamCipher`](crate::stream::StreamCipher) implementors would overlap
/// this one, which trait coherence forbids.
pub trait NonceGenerator {
    /// Draw a fresh random nonce of `N` bytes
    fn generate_nonce<const N: usize, R: RngCore + CryptoRng>(rng: &mut R) -> Nonce<N> {
        Nonce::random(rng)
    }
}

impl<T: BlockCipherAlgorithm> NonceGenerator for T {}
