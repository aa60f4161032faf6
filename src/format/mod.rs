//! On-disk token file format.
//!
//! ```text
//! repeat N times:
//!   offset : u16 LE   (0 with length 0 marks a literal)
//!   length : u16 LE
//!   symbol : u8
//! crc32    : u32 LE   over the preceding N*5 bytes
//! ```

pub mod constants;
pub mod inspect;
pub mod reader;
pub mod writer;

pub use constants::*;
pub use inspect::{inspect, ArchiveSummary};
pub use reader::{parse_tokens, read_tokens};
pub use writer::{serialize, TokenWriter};

use crate::error::Result;
use crate::files::read_all_bytes;
use crate::lz77::Token;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write tokens to `path` (created or truncated). Returns the file size.
pub fn save<P: AsRef<Path>>(path: P, tokens: &[Token]) -> Result<u64> {
    let mut writer = TokenWriter::new(BufWriter::new(File::create(path)?));
    writer.write_tokens(tokens)?;
    let size = writer.bytes_written() + CHECKSUM_SIZE as u64;
    writer.finish()?;
    Ok(size)
}

/// Read and verify the token file at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Token>> {
    parse_tokens(&read_all_bytes(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_save_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.lz77");
        let tokens = vec![Token::literal(b'A'), Token::copy(1, 5, b'B')];

        let size = save(&path, &tokens).unwrap();
        assert_eq!(size, file_size(2) as u64);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), size);
        assert_eq!(load(&path).unwrap(), tokens);
    }

    #[test]
    fn test_save_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.lz77");
        std::fs::write(&path, vec![0xAAu8; 100]).unwrap();

        save(&path, &[]).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), EMPTY_FILE);
    }

    #[test]
    fn test_load_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load(dir.path().join("nope.lz77")), Err(Error::Io(_))));
    }
}
