//! Constants for symmetric primitives and modes of operation

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of blocks processed per batched block-cipher call
pub const AES_PARALLEL_BLOCKS: usize = 8;

/// GCM nonce size in bytes (the 96-bit fast path of SP 800-38D)
pub const GCM_NONCE_SIZE: usize = 12;

/// GCM authentication tag size in bytes
pub const GCM_TAG_SIZE: usize = 16;

/// OCB nonce size in bytes (RFC 7253 permits up to 15; 12 is the profile
/// the preset catalog pins)
pub const OCB_NONCE_SIZE: usize = 12;

/// OCB authentication tag size in bytes
pub const OCB_TAG_SIZE: usize = 16;

/// CTR mode counter width in bytes (big-endian, placed at the end of the
/// counter block per SP 800-38A)
pub const CTR_COUNTER_SIZE: usize = 4;

/// Plaintext chunk size used by the streaming encrypt/decrypt paths
pub const STREAM_CHUNK_SIZE: usize = 16384;
