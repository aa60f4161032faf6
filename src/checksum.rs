//! CRC-32/ISO-HDLC checksums for the token file trailer.
//!
//! Polynomial 0xEDB88320 (reflected), initial register 0xFFFFFFFF, final
//! XOR 0xFFFFFFFF. This is the same CRC used by gzip and zip, so the
//! table-driven `crc32fast` implementation produces identical values.

use std::io::{self, Write};

/// Compute the CRC32 of a byte slice.
#[inline]
pub fn checksum(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// A writer adapter that computes the CRC32 of everything written through it.
pub struct ChecksumWriter<W: Write> {
    inner: W,
    hasher: crc32fast::Hasher,
    bytes_written: u64,
}

impl<W: Write> ChecksumWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, hasher: crc32fast::Hasher::new(), bytes_written: 0 }
    }

    /// Number of bytes written so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Unwrap into the inner writer and the final checksum
    pub fn into_parts(self) -> (W, u32) {
        (self.inner, self.hasher.finalize())
    }
}

impl<W: Write> Write for ChecksumWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        self.bytes_written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
