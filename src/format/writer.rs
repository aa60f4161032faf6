use super::constants::*;
use crate::checksum::ChecksumWriter;
use crate::error::Result;
use crate::lz77::Token;
use std::io::Write;

/// Writes token records followed by the CRC32 trailer
pub struct TokenWriter<W: Write> {
    writer: ChecksumWriter<W>,
    tokens_written: u64,
}

impl<W: Write> TokenWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer: ChecksumWriter::new(writer), tokens_written: 0 }
    }

    /// Write a single 5-byte token record
    pub fn write_token(&mut self, token: &Token) -> Result<()> {
        self.writer.write_all(&token.to_bytes())?;
        self.tokens_written += 1;
        Ok(())
    }

    /// Write a sequence of token records
    pub fn write_tokens(&mut self, tokens: &[Token]) -> Result<()> {
        for token in tokens {
            self.write_token(token)?;
        }
        Ok(())
    }

    pub fn tokens_written(&self) -> u64 {
        self.tokens_written
    }

    /// Record bytes written so far (trailer excluded)
    pub fn bytes_written(&self) -> u64 {
        self.writer.bytes_written()
    }

    /// Write the CRC32 trailer, flush, and return the inner writer
    pub fn finish(self) -> Result<W> {
        let (mut writer, crc) = self.writer.into_parts();
        writer.write_all(&crc.to_le_bytes())?;
        writer.flush()?;

        log::debug!("Wrote {} token records, CRC32 0x{:08x}", self.tokens_written, crc);

        Ok(writer)
    }
}

/// Serialize tokens into the on-disk layout.
pub fn serialize(tokens: &[Token]) -> Vec<u8> {
    let mut out = Vec::with_capacity(file_size(tokens.len()));
    for token in tokens {
        out.extend_from_slice(&token.to_bytes());
    }
    let crc = crate::checksum::checksum(&out);
    out.extend_from_slice(&crc.to_le_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_empty() {
        let writer = TokenWriter::new(Vec::new());
        let output = writer.finish().unwrap();
        assert_eq!(output, EMPTY_FILE);
    }

    #[test]
    fn test_write_tokens() {
        let tokens = [Token::literal(b'A'), Token::copy(1, 3, b'B')];

        let mut writer = TokenWriter::new(Vec::new());
        writer.write_tokens(&tokens).unwrap();
        assert_eq!(writer.tokens_written(), 2);
        assert_eq!(writer.bytes_written(), 10);
        let output = writer.finish().unwrap();

        assert_eq!(output.len(), file_size(2));
        assert_eq!(&output[..5], &[0, 0, 0, 0, b'A']);
        assert_eq!(&output[5..10], &[1, 0, 3, 0, b'B']);

        let crc = u32::from_le_bytes([output[10], output[11], output[12], output[13]]);
        assert_eq!(crc, crc32fast::hash(&output[..10]));
    }

    #[test]
    fn test_serialize_matches_writer() {
        let tokens: Vec<Token> =
            (0..100u16).map(|i| Token::copy(i % 7, i % 5, (i * 3) as u8)).collect();

        let mut writer = TokenWriter::new(Vec::new());
        writer.write_tokens(&tokens).unwrap();
        assert_eq!(writer.finish().unwrap(), serialize(&tokens));
    }
}
