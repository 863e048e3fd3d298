//! Forward-only big-endian field reader.
//!
//! `FrameReader` knows nothing about headers or records. It pulls exact byte
//! counts out of any `Read` source and converts them from big-endian. A short
//! read is always `TruncatedInput`; it is up to the caller to decide whether
//! running out of input at a frame boundary was expected.

use crate::error::{Error, Result};
use std::io::{ErrorKind, Read};

/// Sequential reader over an ordered byte source.
///
/// Tracks the number of bytes consumed so that truncation errors can report
/// where in the stream they happened.
pub struct FrameReader<R> {
    inner: R,
    position: u64,
}

impl<R: Read> FrameReader<R> {
    /// Wraps a byte source. The cursor starts at offset zero.
    pub fn new(inner: R) -> Self {
        FrameReader { inner, position: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Returns the underlying source, positioned just after the last field read.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Reads exactly `N` bytes.
    pub fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Reads exactly `n` bytes into a fresh buffer.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let [b] = self.read_fixed_bytes::<1>()?;
        Ok(b)
    }

    pub fn read_u32_be(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.read_fixed_bytes()?))
    }

    pub fn read_u64_be(&mut self) -> Result<u64> {
        Ok(u64::from_be_bytes(self.read_fixed_bytes()?))
    }

    pub fn read_f64_be(&mut self) -> Result<f64> {
        Ok(f64::from_be_bytes(self.read_fixed_bytes()?))
    }

    /// Fills `buf` completely or fails with `TruncatedInput`.
    ///
    /// Unlike `Read::read_exact`, this keeps count of how many bytes did
    /// arrive so the error can say so.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let start = self.position;
        let mut filled = 0;

        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(Error::TruncatedInput {
                        offset: start,
                        needed: buf.len(),
                        available: filled,
                    });
                }
                Ok(n) => {
                    filled += n;
                    self.position += n as u64;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }

        Ok(())
    }
}
