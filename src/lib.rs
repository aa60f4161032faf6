pub mod checksum;
pub mod error;
pub mod files;
pub mod format;
pub mod lz77;
pub mod pipeline;

pub use checksum::checksum;
pub use error::{Error, Result};
pub use format::{inspect, load, save, ArchiveSummary};
pub use lz77::{Token, TokenCounts, DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE};
pub use pipeline::{verify_roundtrip, Compressor, Decompressor, RoundtripReport};

use std::io::{Read, Write};

/// Configuration for compression
#[derive(Clone, Debug)]
pub struct CompressConfig {
    /// Maximum back-reference distance in bytes (1-65535, default: 4096)
    pub window_size: usize,
    /// Buffer size for I/O operations
    pub buffer_size: usize,
}

impl CompressConfig {
    /// Default configuration with a different window size
    pub fn with_window_size(window_size: usize) -> Self {
        Self { window_size, ..Default::default() }
    }

    /// Check that the window fits the 16-bit offset field
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 || self.window_size > MAX_WINDOW_SIZE {
            return Err(Error::InvalidWindowSize(self.window_size));
        }
        Ok(())
    }
}

impl Default for CompressConfig {
    fn default() -> Self {
        Self { window_size: DEFAULT_WINDOW_SIZE, buffer_size: 128 * 1024 }
    }
}

/// Statistics from a compress or decompress operation
#[derive(Clone, Debug, Default)]
pub struct CodecStats {
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub tokens: TokenCounts,
}

/// Trait for a complete compress or decompress operation
pub trait Codec {
    /// Read all of `input`, transform it, and write the result to `output`
    fn process<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<CodecStats>;
}

/// Encode `input` into tokens using a `window_size`-byte lookback window.
pub fn compress(input: &[u8], window_size: usize) -> Result<Vec<Token>> {
    CompressConfig::with_window_size(window_size).validate()?;
    Ok(lz77::encode(input, window_size))
}

/// Decode tokens back into the original bytes.
pub fn decompress(tokens: &[Token]) -> Result<Vec<u8>> {
    lz77::decode(tokens)
}

/// Compare two buffers: length first, then contents.
pub fn bytes_equal(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a == b
}
