//! Chunked AEAD streaming over `std::io`
//!
//! Large inputs are sealed in fixed-size chunks, each under a nonce derived
//! from a random base nonce and the chunk counter. The wire format is:
//!
//! ```text
//! base_nonce                         (suite nonce size)
//! repeated:  0x01 | counter: u32 BE | length: u32 BE | sealed chunk
//! finally:   0x00
//! ```
//!
//! The explicit terminator makes truncation detectable: a stream that ends
//! without it fails to decrypt. Chunk counters must arrive in order, so
//! chunks can be neither dropped nor reordered without detection. The chunk
//! nonce is the base nonce with the counter XORed into its trailing four
//! bytes, which keeps every chunk nonce distinct until the counter would
//! wrap; the writer refuses to go that far.

use std::io::{Read, Write};

use byteorder::{BigEndian, ByteOrder};

use algorithms::types::SecretVec;
use params::symmetric::STREAM_CHUNK_SIZE;

use crate::error::{Error, Result};
use crate::registry::{self, AeadSuite};

const CHUNK_MARKER: u8 = 0x01;
const END_MARKER: u8 = 0x00;

fn chunk_nonce(base: &[u8], counter: u32) -> Vec<u8> {
    let mut nonce = base.to_vec();
    let tail = nonce.len() - 4;
    let mut counter_bytes = [0u8; 4];
    BigEndian::write_u32(&mut counter_bytes, counter);
    for (byte, counter_byte) in nonce[tail..].iter_mut().zip(counter_bytes) {
        *byte ^= counter_byte;
    }
    nonce
}

fn checked_key(suite: &dyn AeadSuite, key: &[u8]) -> Result<SecretVec> {
    let info = suite.info();
    if key.len() != info.key_size {
        return Err(Error::InvalidLength {
            context: info.name,
            expected: info.key_size,
            actual: key.len(),
        });
    }
    Ok(SecretVec::from_slice(key))
}

/// Writer half of the streaming format.
///
/// Buffers plaintext until a full chunk is available, then seals and frames
/// it. [`EncryptStream::finalize`] flushes the partial last chunk and writes
/// the terminator; dropping the stream without finalizing produces a
/// truncated stream that will not decrypt.
pub struct EncryptStream<W: Write> {
    writer: W,
    suite: Box<dyn AeadSuite>,
    key: SecretVec,
    aad: Option<Vec<u8>>,
    base_nonce: Vec<u8>,
    counter: u32,
    buffer: Vec<u8>,
}

impl<W: Write> core::fmt::Debug for EncryptStream<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EncryptStream")
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}

impl<W: Write> EncryptStream<W> {
    /// Open a stream for `token`, writing the base nonce header immediately
    pub fn new(mut writer: W, token: &str, key: &[u8], aad: Option<&[u8]>) -> Result<Self> {
        let suite = registry::resolve(token)?;
        let key = checked_key(suite.as_ref(), key)?;
        let base_nonce = suite.generate_nonce();
        writer.write_all(&base_nonce)?;
        Ok(Self {
            writer,
            suite,
            key,
            aad: aad.map(|a| a.to_vec()),
            base_nonce,
            counter: 0,
            buffer: Vec::with_capacity(STREAM_CHUNK_SIZE),
        })
    }

    /// Append plaintext, sealing as many full chunks as it completes
    pub fn write(&mut self, plaintext: &[u8]) -> Result<()> {
        self.buffer.extend_from_slice(plaintext);
        while self.buffer.len() >= STREAM_CHUNK_SIZE {
            self.seal_chunk(STREAM_CHUNK_SIZE)?;
        }
        Ok(())
    }

    fn seal_chunk(&mut self, len: usize) -> Result<()> {
        if self.counter == u32::MAX {
            return Err(Error::InvalidParameter {
                context: "EncryptStream",
                message: "chunk counter exhausted".to_string(),
            });
        }
        self.counter += 1;

        let chunk: Vec<u8> = self.buffer.drain(..len).collect();
        let nonce = chunk_nonce(&self.base_nonce, self.counter);
        let sealed = self
            .suite
            .seal(self.key.as_ref(), &nonce, &chunk, self.aad.as_deref())?;

        let mut header = [0u8; 9];
        header[0] = CHUNK_MARKER;
        BigEndian::write_u32(&mut header[1..5], self.counter);
        BigEndian::write_u32(&mut header[5..9], sealed.len() as u32);
        self.writer.write_all(&header)?;
        self.writer.write_all(&sealed)?;
        Ok(())
    }

    /// Seal the remaining partial chunk, write the terminator and flush
    pub fn finalize(mut self) -> Result<W> {
        let remaining = self.buffer.len();
        if remaining > 0 {
            self.seal_chunk(remaining)?;
        }
        self.writer.write_all(&[END_MARKER])?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Reader half of the streaming format.
///
/// Pull-based: [`DecryptStream::read`] refills from the next frame whenever
/// its plaintext buffer runs dry. Every framing violation, out-of-order
/// counter, oversized chunk or failed tag surfaces as an error; a return of
/// zero means the terminator was reached.
pub struct DecryptStream<R: Read> {
    reader: R,
    suite: Box<dyn AeadSuite>,
    key: SecretVec,
    aad: Option<Vec<u8>>,
    base_nonce: Vec<u8>,
    counter: u32,
    buffer: Vec<u8>,
    position: usize,
    finished: bool,
}

impl<R: Read> DecryptStream<R> {
    /// Open a stream for `token`, reading the base nonce header immediately
    pub fn new(mut reader: R, token: &str, key: &[u8], aad: Option<&[u8]>) -> Result<Self> {
        let suite = registry::resolve(token)?;
        let key = checked_key(suite.as_ref(), key)?;
        let mut base_nonce = vec![0u8; suite.info().nonce_size];
        reader.read_exact(&mut base_nonce)?;
        Ok(Self {
            reader,
            suite,
            key,
            aad: aad.map(|a| a.to_vec()),
            base_nonce,
            counter: 0,
            buffer: Vec::new(),
            position: 0,
            finished: false,
        })
    }

    /// Fill `out` with plaintext; zero means the stream ended cleanly
    pub fn read(&mut self, out: &mut [u8]) -> Result<usize> {
        while self.position == self.buffer.len() && !self.finished {
            self.open_chunk()?;
        }

        let available = self.buffer.len() - self.position;
        let take = available.min(out.len());
        out[..take].copy_from_slice(&self.buffer[self.position..self.position + take]);
        self.position += take;
        Ok(take)
    }

    /// Drain the whole stream into a vector
    pub fn read_to_end(&mut self, out: &mut Vec<u8>) -> Result<usize> {
        let mut total = 0;
        let mut chunk = vec![0u8; STREAM_CHUNK_SIZE];
        loop {
            let n = self.read(&mut chunk)?;
            if n == 0 {
                return Ok(total);
            }
            out.extend_from_slice(&chunk[..n]);
            total += n;
        }
    }

    fn open_chunk(&mut self) -> Result<()> {
        let mut marker = [0u8; 1];
        self.reader.read_exact(&mut marker)?;
        if marker[0] == END_MARKER {
            self.finished = true;
            return Ok(());
        }
        if marker[0] != CHUNK_MARKER {
            return Err(Error::InvalidParameter {
                context: "DecryptStream",
                message: "corrupt chunk marker".to_string(),
            });
        }

        let mut header = [0u8; 8];
        self.reader.read_exact(&mut header)?;
        let counter = BigEndian::read_u32(&header[..4]);
        let length = BigEndian::read_u32(&header[4..]) as usize;

        if counter != self.counter.wrapping_add(1) {
            return Err(Error::InvalidParameter {
                context: "DecryptStream",
                message: "chunk out of order".to_string(),
            });
        }
        if length > STREAM_CHUNK_SIZE + self.suite.info().tag_size {
            return Err(Error::InvalidLength {
                context: "DecryptStream chunk",
                expected: STREAM_CHUNK_SIZE + self.suite.info().tag_size,
                actual: length,
            });
        }

        let mut sealed = vec![0u8; length];
        self.reader.read_exact(&mut sealed)?;

        let nonce = chunk_nonce(&self.base_nonce, counter);
        let plaintext = self
            .suite
            .open(self.key.as_ref(), &nonce, &sealed, self.aad.as_deref())?;

        self.counter = counter;
        self.buffer = plaintext;
        self.position = 0;
        Ok(())
    }
}
