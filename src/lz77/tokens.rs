/// A single token in the LZ77 stream.
///
/// `offset == 0 && length == 0` is a literal: only `symbol` is emitted.
/// Otherwise `length` bytes are copied from `offset` bytes back in the output,
/// and `symbol` is appended after the copied run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Backward distance to the start of the copied run (1-based)
    pub offset: u16,
    /// Number of bytes to copy
    pub length: u16,
    /// Byte emitted after the copy (or on its own for literals)
    pub symbol: u8,
}

impl Token {
    /// Size of a serialized token in bytes (u16 offset, u16 length, u8 symbol).
    pub const SERIALIZED_SIZE: usize = 5;

    /// A literal token
    pub const fn literal(symbol: u8) -> Self {
        Self { offset: 0, length: 0, symbol }
    }

    /// A back-reference followed by a trailing literal
    pub const fn copy(offset: u16, length: u16, symbol: u8) -> Self {
        Self { offset, length, symbol }
    }

    pub fn is_literal(&self) -> bool {
        self.offset == 0 && self.length == 0
    }

    /// Returns the uncompressed size this token represents
    pub fn uncompressed_size(&self) -> usize {
        if self.is_literal() {
            1
        } else {
            self.length as usize + 1
        }
    }

    /// Serialize this token to bytes (little-endian).
    pub fn to_bytes(&self) -> [u8; Self::SERIALIZED_SIZE] {
        let mut buf = [0u8; Self::SERIALIZED_SIZE];
        buf[0..2].copy_from_slice(&self.offset.to_le_bytes());
        buf[2..4].copy_from_slice(&self.length.to_le_bytes());
        buf[4] = self.symbol;
        buf
    }

    /// Deserialize a token from bytes (little-endian).
    pub fn from_bytes(buf: &[u8; Self::SERIALIZED_SIZE]) -> Self {
        Self {
            offset: u16::from_le_bytes([buf[0], buf[1]]),
            length: u16::from_le_bytes([buf[2], buf[3]]),
            symbol: buf[4],
        }
    }
}

/// Literal/match breakdown of a token sequence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenCounts {
    pub literals: u64,
    pub matches: u64,
    /// Bytes the sequence expands to when decoded
    pub uncompressed_bytes: u64,
}

impl TokenCounts {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut counts = Self::default();
        for token in tokens {
            counts.add(token);
        }
        counts
    }

    pub fn add(&mut self, token: &Token) {
        if token.is_literal() {
            self.literals += 1;
        } else {
            self.matches += 1;
        }
        self.uncompressed_bytes += token.uncompressed_size() as u64;
    }

    pub fn total(&self) -> u64 {
        self.literals + self.matches
    }
}
