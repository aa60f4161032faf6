use super::constants::*;
use crate::checksum::checksum;
use crate::error::{Error, Result};
use crate::lz77::Token;
use std::io::Read;

/// Split a token file into its record body, checking the trailer.
///
/// Checks run in a fixed order: minimum size, then CRC32, then record
/// alignment. A file with a stray trailing byte therefore fails the CRC
/// check before alignment is considered.
pub fn verified_body(data: &[u8]) -> Result<&[u8]> {
    if data.len() < MIN_FILE_SIZE {
        return Err(Error::TruncatedFile { size: data.len() });
    }

    let (body, trailer) = data.split_at(data.len() - CHECKSUM_SIZE);
    let expected = u32::from_le_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);
    let found = checksum(body);
    if expected != found {
        log::debug!("Token file CRC32 mismatch: stored 0x{:08x}, computed 0x{:08x}", expected, found);
        return Err(Error::ChecksumMismatch { expected, found });
    }

    if body.len() % RECORD_SIZE != 0 {
        log::debug!("Token data of {} bytes is not record-aligned", body.len());
        return Err(Error::MalformedRecord { body_len: body.len() });
    }

    Ok(body)
}

/// Iterate the records of an already verified body
pub fn records(body: &[u8]) -> impl Iterator<Item = Token> + '_ {
    body.chunks_exact(RECORD_SIZE).map(|chunk| {
        let mut record = [0u8; RECORD_SIZE];
        record.copy_from_slice(chunk);
        Token::from_bytes(&record)
    })
}

/// Parse and verify a complete token file.
pub fn parse_tokens(data: &[u8]) -> Result<Vec<Token>> {
    let body = verified_body(data)?;
    let tokens: Vec<Token> = records(body).collect();

    log::debug!("Read {} token records from {} bytes", tokens.len(), data.len());

    Ok(tokens)
}

/// Read a complete token file from `reader` and parse it.
pub fn read_tokens<R: Read>(reader: &mut R) -> Result<Vec<Token>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    parse_tokens(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::writer::serialize;
    use std::io::Cursor;

    fn with_trailer(body: &[u8]) -> Vec<u8> {
        let mut data = body.to_vec();
        data.extend_from_slice(&checksum(body).to_le_bytes());
        data
    }

    #[test]
    fn test_parse_empty_file() {
        assert!(parse_tokens(&EMPTY_FILE).unwrap().is_empty());
    }

    #[test]
    fn test_parse_tokens() {
        let tokens = vec![Token::literal(b'A'), Token::copy(1, 5, b'B'), Token::literal(0xFF)];
        assert_eq!(parse_tokens(&serialize(&tokens)).unwrap(), tokens);
    }

    #[test]
    fn test_truncated() {
        for size in 0..MIN_FILE_SIZE {
            let data = vec![0u8; size];
            assert!(matches!(parse_tokens(&data), Err(Error::TruncatedFile { size: s }) if s == size));
        }
    }

    #[test]
    fn test_checksum_mismatch() {
        let mut data = serialize(&[Token::literal(b'A'), Token::copy(1, 1, b'A')]);
        data[4] ^= 0x01;
        assert!(matches!(parse_tokens(&data), Err(Error::ChecksumMismatch { .. })));
    }

    #[test]
    fn test_corrupted_trailer() {
        let mut data = serialize(&[Token::literal(b'A')]);
        let last = data.len() - 1;
        data[last] ^= 0x80;
        assert!(matches!(parse_tokens(&data), Err(Error::ChecksumMismatch { .. })));
    }

    #[test]
    fn test_misaligned_body() {
        // 5*2 + 1 body bytes with a valid CRC over them
        let data = with_trailer(&[0, 0, 0, 0, b'A', 0, 0, 0, 0, b'B', 0x7F]);
        assert_eq!(data.len(), file_size(2) + 1);
        assert!(matches!(parse_tokens(&data), Err(Error::MalformedRecord { body_len: 11 })));
    }

    #[test]
    fn test_stray_byte_fails_checksum_first() {
        let mut data = serialize(&[Token::literal(b'A')]);
        data.push(0x00);
        assert!(matches!(parse_tokens(&data), Err(Error::ChecksumMismatch { .. })));
    }

    #[test]
    fn test_read_tokens_from_reader() {
        let tokens = vec![Token::literal(b'x'), Token::copy(1, 2, b'y')];
        let mut cursor = Cursor::new(serialize(&tokens));
        assert_eq!(read_tokens(&mut cursor).unwrap(), tokens);
    }
}
