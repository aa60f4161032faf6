//! Token file inspection.
//!
//! Verifies a token file end to end (trailer, CRC32, record alignment and
//! every back-reference) without materialising the decoded output, and
//! reports what it contains.

use super::constants::*;
use super::reader::{records, verified_body};
use crate::error::{Error, Result};
use crate::lz77::TokenCounts;

/// Summary of a verified token file
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    /// Total file size, trailer included
    pub file_size: u64,
    /// CRC32 stored in (and verified against) the trailer
    pub checksum: u32,
    /// Literal/match breakdown; `uncompressed_bytes` is the decoded size
    pub tokens: TokenCounts,
}

impl ArchiveSummary {
    /// File size divided by decoded size (0 for an empty archive)
    pub fn ratio(&self) -> f64 {
        if self.tokens.uncompressed_bytes == 0 {
            0.0
        } else {
            self.file_size as f64 / self.tokens.uncompressed_bytes as f64
        }
    }
}

/// Verify a complete token file and summarise its contents.
pub fn inspect(data: &[u8]) -> Result<ArchiveSummary> {
    let body = verified_body(data)?;
    let trailer = &data[body.len()..];
    let checksum = u32::from_le_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);

    let mut counts = TokenCounts::default();
    for token in records(body) {
        // Same rule the decoder applies, tracked by length only
        if token.length > 0 {
            let available = counts.uncompressed_bytes as usize;
            if token.offset == 0 || token.offset as usize > available {
                return Err(Error::InvalidBackReference {
                    offset: token.offset,
                    length: token.length,
                    available,
                });
            }
        }
        counts.add(&token);
    }

    debug_assert_eq!(data.len(), file_size(counts.total() as usize));

    Ok(ArchiveSummary { file_size: data.len() as u64, checksum, tokens: counts })
}
