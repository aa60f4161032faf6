use crate::error::Result;
use crate::format::{parse_tokens, TokenWriter};
use crate::lz77::{decode, encode, TokenCounts};
use crate::{Codec, CodecStats, CompressConfig};
use std::io::{BufReader, BufWriter, Read, Write};

/// Compresses a whole input into a token file
pub struct Compressor {
    config: CompressConfig,
}

impl Compressor {
    pub fn new(config: CompressConfig) -> Self {
        Self { config }
    }

    /// Compress an in-memory (or memory-mapped) buffer into `output`
    pub fn compress_bytes<W: Write>(&self, data: &[u8], output: W) -> Result<CodecStats> {
        self.config.validate()?;

        let tokens = encode(data, self.config.window_size);

        let mut writer =
            TokenWriter::new(BufWriter::with_capacity(self.config.buffer_size, output));
        writer.write_tokens(&tokens)?;
        let body_bytes = writer.bytes_written();
        writer.finish()?;

        let stats = CodecStats {
            input_bytes: data.len() as u64,
            output_bytes: body_bytes + crate::format::CHECKSUM_SIZE as u64,
            tokens: TokenCounts::from_tokens(&tokens),
        };

        log::debug!(
            "Compressed {} -> {} bytes ({} literals, {} matches)",
            stats.input_bytes,
            stats.output_bytes,
            stats.tokens.literals,
            stats.tokens.matches
        );

        Ok(stats)
    }
}

impl Codec for Compressor {
    fn process<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<CodecStats> {
        let mut reader = BufReader::with_capacity(self.config.buffer_size, input);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.compress_bytes(&data, output)
    }
}

/// Verifies and decodes a whole token file
pub struct Decompressor {
    buffer_size: usize,
}

impl Decompressor {
    pub fn new(config: CompressConfig) -> Self {
        Self { buffer_size: config.buffer_size }
    }

    /// Decompress an in-memory token file into `output`
    pub fn decompress_bytes<W: Write>(&self, data: &[u8], output: W) -> Result<CodecStats> {
        let tokens = parse_tokens(data)?;
        let decoded = decode(&tokens)?;

        let mut writer = BufWriter::with_capacity(self.buffer_size, output);
        writer.write_all(&decoded)?;
        writer.flush()?;

        let stats = CodecStats {
            input_bytes: data.len() as u64,
            output_bytes: decoded.len() as u64,
            tokens: TokenCounts::from_tokens(&tokens),
        };

        log::debug!("Decompressed {} -> {} bytes", stats.input_bytes, stats.output_bytes);

        Ok(stats)
    }
}

impl Default for Decompressor {
    fn default() -> Self {
        Self::new(CompressConfig::default())
    }
}

impl Codec for Decompressor {
    fn process<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<CodecStats> {
        let mut reader = BufReader::with_capacity(self.buffer_size, input);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.decompress_bytes(&data, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Cursor;

    #[test]
    fn test_compress_simple() {
        let mut compressor = Compressor::new(CompressConfig::default());
        let mut output = Vec::new();
        let stats = compressor.process(Cursor::new(b"ABCABCABC"), &mut output).unwrap();

        assert_eq!(stats.input_bytes, 9);
        assert_eq!(stats.output_bytes, output.len() as u64);
        assert_eq!(stats.tokens.total(), 6);
        assert_eq!(stats.tokens.matches, 1);
        assert_eq!(output.len(), 6 * 5 + 4);
    }

    #[test]
    fn test_compress_then_decompress() {
        let data = b"Hello, Hello, Hello, World!".to_vec();

        let mut compressed = Vec::new();
        Compressor::new(CompressConfig::default())
            .process(Cursor::new(&data), &mut compressed)
            .unwrap();

        let mut decompressed = Vec::new();
        let stats =
            Decompressor::default().process(Cursor::new(&compressed), &mut decompressed).unwrap();

        assert_eq!(decompressed, data);
        assert_eq!(stats.input_bytes, compressed.len() as u64);
        assert_eq!(stats.output_bytes, data.len() as u64);
        assert_eq!(stats.tokens.uncompressed_bytes, data.len() as u64);
    }

    #[test]
    fn test_compress_invalid_window() {
        let compressor = Compressor::new(CompressConfig::with_window_size(0));
        let mut output = Vec::new();
        assert!(matches!(
            compressor.compress_bytes(b"abc", &mut output),
            Err(Error::InvalidWindowSize(0))
        ));
        assert!(output.is_empty());
    }

    #[test]
    fn test_decompress_corrupt() {
        let mut compressed = Vec::new();
        Compressor::new(CompressConfig::default())
            .compress_bytes(b"some data to corrupt", &mut compressed)
            .unwrap();
        compressed[2] ^= 0x10;

        let mut output = Vec::new();
        let result = Decompressor::default().decompress_bytes(&compressed, &mut output);
        assert!(matches!(result, Err(Error::ChecksumMismatch { .. })));
        assert!(output.is_empty());
    }
}
