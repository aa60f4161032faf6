use crate::lz77::Token;

/// Size of one serialized token record (u16 offset, u16 length, u8 symbol)
pub const RECORD_SIZE: usize = Token::SERIALIZED_SIZE;

/// Size of the CRC32 trailer
pub const CHECKSUM_SIZE: usize = 4;

/// Smallest valid token file: zero records plus the trailer
pub const MIN_FILE_SIZE: usize = CHECKSUM_SIZE;

/// Token file for an empty input (CRC32 of zero bytes is 0)
pub const EMPTY_FILE: [u8; 4] = [0x00, 0x00, 0x00, 0x00];

/// File extension appended to compressed files
pub const COMPRESSED_EXTENSION: &str = "lz77";

/// File extension appended to decompressed files by the self-test
pub const DECOMPRESSED_EXTENSION: &str = "dec";

/// Size of a token file holding `token_count` records
pub const fn file_size(token_count: usize) -> usize {
    token_count * RECORD_SIZE + CHECKSUM_SIZE
}
