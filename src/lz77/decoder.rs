use super::tokens::Token;
use crate::error::{Error, Result};

/// Incremental LZ77 decoder.
///
/// Tokens are applied one at a time against the output produced so far,
/// which doubles as the lookback window.
#[derive(Debug, Default)]
pub struct Decoder {
    output: Vec<u8>,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with room for `capacity` output bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self { output: Vec::with_capacity(capacity) }
    }

    /// Apply a single token.
    ///
    /// Fails with [`Error::InvalidBackReference`] if the token copies from
    /// before the start of the output. The output is left unchanged on error.
    pub fn push(&mut self, token: &Token) -> Result<()> {
        if token.length > 0 {
            let distance = token.offset as usize;
            if distance == 0 || distance > self.output.len() {
                return Err(Error::InvalidBackReference {
                    offset: token.offset,
                    length: token.length,
                    available: self.output.len(),
                });
            }
            self.copy_back_reference(distance, token.length as usize);
        }

        self.output.push(token.symbol);
        Ok(())
    }

    /// Apply a sequence of tokens in order
    pub fn extend(&mut self, tokens: &[Token]) -> Result<()> {
        self.output.reserve(tokens.len());
        for token in tokens {
            self.push(token)?;
        }
        Ok(())
    }

    /// Bytes decoded so far
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Consume the decoder and return the decoded bytes
    pub fn finish(self) -> Vec<u8> {
        self.output
    }

    /// Copy `length` bytes from `distance` bytes back.
    ///
    /// Length can exceed distance (run-length case), in which case bytes
    /// appended by this copy are read again later in the same copy.
    #[inline]
    fn copy_back_reference(&mut self, distance: usize, length: usize) {
        let start = self.output.len() - distance;

        if length <= distance {
            self.output.extend_from_within(start..start + length);
        } else {
            self.output.reserve(length);
            for i in 0..length {
                let byte = self.output[start + i];
                self.output.push(byte);
            }
        }
    }
}

/// Decode a token sequence into bytes.
pub fn decode(tokens: &[Token]) -> Result<Vec<u8>> {
    let mut decoder = Decoder::with_capacity(tokens.len());
    decoder.extend(tokens)?;
    Ok(decoder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty() {
        assert!(decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_decode_literals() {
        let tokens = [Token::literal(b'A'), Token::literal(b'B')];
        assert_eq!(decode(&tokens).unwrap(), b"AB");
    }

    #[test]
    fn test_decode_copy() {
        let tokens = [
            Token::literal(b'A'),
            Token::literal(b'B'),
            Token::literal(b'C'),
            Token::copy(3, 3, b'D'),
        ];
        assert_eq!(decode(&tokens).unwrap(), b"ABCABCD");
    }

    #[test]
    fn test_decode_rle() {
        // distance=1, length=5 after a single byte -> "AAAAAA" then the symbol
        let tokens = [Token::literal(b'A'), Token::copy(1, 5, b'B')];
        assert_eq!(decode(&tokens).unwrap(), b"AAAAAAB");
    }

    #[test]
    fn test_decode_rle_pattern() {
        // distance=2, length=6 -> "ABABAB"
        let tokens = [Token::literal(b'A'), Token::literal(b'B'), Token::copy(2, 6, b'!')];
        assert_eq!(decode(&tokens).unwrap(), b"ABABABAB!");
    }

    #[test]
    fn test_offset_without_length_emits_symbol() {
        let tokens = [Token::copy(9, 0, b'Z')];
        assert_eq!(decode(&tokens).unwrap(), b"Z");
    }

    #[test]
    fn test_reference_before_start() {
        let tokens = [Token::literal(b'A'), Token::copy(2, 1, b'B')];
        match decode(&tokens) {
            Err(Error::InvalidBackReference { offset, length, available }) => {
                assert_eq!((offset, length, available), (2, 1, 1));
            }
            other => panic!("expected InvalidBackReference, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_offset_with_length() {
        let tokens = [Token::literal(b'A'), Token::copy(0, 3, b'B')];
        assert!(matches!(decode(&tokens), Err(Error::InvalidBackReference { offset: 0, .. })));
    }

    #[test]
    fn test_push_failure_leaves_output_intact() {
        let mut decoder = Decoder::new();
        decoder.push(&Token::literal(b'x')).unwrap();
        assert!(decoder.push(&Token::copy(5, 5, b'y')).is_err());
        assert_eq!(decoder.output(), b"x");
        assert_eq!(decoder.len(), 1);
    }
}
