//! Developer facade over the preset registry
//!
//! [`Encryptor`] is the five-minute path: pick a preset by token, generate a
//! key, encrypt, decrypt. One instance is bound to one nonce, drawn at
//! construction (or supplied via [`Encryptor::with_nonce`]); the ciphertext
//! it returns is exactly `ciphertext || tag`, with the nonce left for the
//! caller to transport alongside. Encrypting a second message therefore
//! needs a fresh instance or a [`NonceSequence`] feeding `with_nonce`.

use std::io::{Read, Write};

use byteorder::{BigEndian, ByteOrder};

use algorithms::types::SecretVec;
use params::symmetric::STREAM_CHUNK_SIZE;

use crate::error::{Error, Result};
use crate::registry::{AeadSuite, Preset, SuiteInfo};
use crate::streaming::{DecryptStream, EncryptStream};

/// One-stop encryption handle resolved from a preset token
pub struct Encryptor {
    preset: Preset,
    suite: Box<dyn AeadSuite>,
    nonce: Vec<u8>,
}

impl core::fmt::Debug for Encryptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Encryptor")
            .field("preset", &self.preset)
            .finish_non_exhaustive()
    }
}

impl Encryptor {
    /// Resolve `token` and bind a fresh random nonce
    pub fn new(token: &str) -> Result<Self> {
        let preset = Preset::from_token(token)?;
        let suite = preset.resolve();
        let nonce = suite.generate_nonce();
        Ok(Self {
            preset,
            suite,
            nonce,
        })
    }

    /// Resolve `token` and bind a caller-supplied nonce.
    ///
    /// The nonce must be fresh under the key this instance will be used
    /// with; that obligation stays with the caller.
    pub fn with_nonce(token: &str, nonce: &[u8]) -> Result<Self> {
        let preset = Preset::from_token(token)?;
        let suite = preset.resolve();
        let info = suite.info();
        if nonce.len() != info.nonce_size {
            return Err(Error::InvalidLength {
                context: info.name,
                expected: info.nonce_size,
                actual: nonce.len(),
            });
        }
        Ok(Self {
            preset,
            suite,
            nonce: nonce.to_vec(),
        })
    }

    /// The preset this instance was resolved from
    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// Descriptor of the resolved suite
    pub fn info(&self) -> SuiteInfo {
        self.suite.info()
    }

    /// The nonce bound to this instance
    pub fn nonce(&self) -> &[u8] {
        &self.nonce
    }

    /// Draw a key of the right size for the resolved suite
    pub fn key_gen(&self) -> SecretVec {
        self.suite.generate_key()
    }

    /// Encrypt `plaintext` under `key`, returning `ciphertext || tag`
    pub fn encrypt(&self, aad: Option<&[u8]>, plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        self.suite.seal(key, &self.nonce, plaintext, aad)
    }

    /// Verify and decrypt `ciphertext || tag` under `key`
    pub fn decrypt(
        &self,
        aad: Option<&[u8]>,
        ciphertext_and_tag: &[u8],
        key: &[u8],
    ) -> Result<Vec<u8>> {
        self.suite.open(key, &self.nonce, ciphertext_and_tag, aad)
    }

    /// Encrypt everything `source` yields into `sink`, chunked and framed.
    ///
    /// The stream carries its own base nonce; the nonce bound to this
    /// instance is not involved.
    pub fn encrypt_buffer<R: Read, W: Write>(
        &self,
        aad: Option<&[u8]>,
        mut source: R,
        sink: W,
        key: &[u8],
    ) -> Result<W> {
        let mut stream = EncryptStream::new(sink, self.preset.token(), key, aad)?;
        let mut chunk = vec![0u8; STREAM_CHUNK_SIZE];
        loop {
            let n = source.read(&mut chunk)?;
            if n == 0 {
                break;
            }
            stream.write(&chunk[..n])?;
        }
        stream.finalize()
    }

    /// Decrypt a stream produced by [`Encryptor::encrypt_buffer`]
    pub fn decrypt_buffer<R: Read, W: Write>(
        &self,
        aad: Option<&[u8]>,
        source: R,
        mut sink: W,
        key: &[u8],
    ) -> Result<W> {
        let mut stream = DecryptStream::new(source, self.preset.token(), key, aad)?;
        let mut chunk = vec![0u8; STREAM_CHUNK_SIZE];
        loop {
            let n = stream.read(&mut chunk)?;
            if n == 0 {
                break;
            }
            sink.write_all(&chunk[..n])?;
        }
        Ok(sink)
    }
}

/// Deterministic nonce schedule for callers encrypting many messages under
/// one key.
///
/// Each call XORs a monotonically increasing counter into the trailing
/// eight bytes of the base nonce, so every nonce up to exhaustion is
/// distinct. The sequence refuses to wrap.
pub struct NonceSequence {
    base: Vec<u8>,
    counter: u64,
}

impl NonceSequence {
    /// Start a sequence over `base`, which must be at least eight bytes
    pub fn new(base: &[u8]) -> Result<Self> {
        if base.len() < 8 {
            return Err(Error::InvalidLength {
                context: "NonceSequence base",
                expected: 8,
                actual: base.len(),
            });
        }
        Ok(Self {
            base: base.to_vec(),
            counter: 0,
        })
    }

    /// The next nonce in the sequence, or an error once exhausted
    pub fn next_nonce(&mut self) -> Result<Vec<u8>> {
        if self.counter == u64::MAX {
            return Err(Error::InvalidParameter {
                context: "NonceSequence",
                message: "sequence exhausted".to_string(),
            });
        }

        let mut nonce = self.base.clone();
        let tail = nonce.len() - 8;
        let mut counter_bytes = [0u8; 8];
        BigEndian::write_u64(&mut counter_bytes, self.counter);
        for (byte, counter_byte) in nonce[tail..].iter_mut().zip(counter_bytes) {
            *byte ^= counter_byte;
        }

        self.counter += 1;
        Ok(nonce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_yields_distinct_nonces() {
        let mut seq = NonceSequence::new(&[0xAB; 12]).unwrap();
        let first = seq.next_nonce().unwrap();
        let second = seq.next_nonce().unwrap();
        let third = seq.next_nonce().unwrap();
        assert_eq!(first, vec![0xAB; 12]);
        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_eq!(first.len(), 12);
    }

    #[test]
    fn sequence_rejects_short_bases() {
        assert!(NonceSequence::new(&[0u8; 4]).is_err());
    }

    #[test]
    fn exhausted_sequence_refuses_to_wrap() {
        let mut seq = NonceSequence::new(&[0u8; 12]).unwrap();
        seq.counter = u64::MAX;
        assert!(seq.next_nonce().is_err());
    }
}
