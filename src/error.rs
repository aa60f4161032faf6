use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Token file errors
    #[error("Token file too short: {size} bytes, need at least 4 for the CRC32 trailer")]
    TruncatedFile { size: usize },

    #[error("CRC32 mismatch: expected 0x{expected:08x}, got 0x{found:08x}")]
    ChecksumMismatch { expected: u32, found: u32 },

    #[error("Token data length {body_len} is not a multiple of the 5-byte record size")]
    MalformedRecord { body_len: usize },

    // LZ77 errors
    #[error("Back-reference offset {offset} (length {length}) exceeds available output {available}")]
    InvalidBackReference { offset: u16, length: u16, available: usize },

    // Configuration errors
    #[error("Invalid window size: {0} (must be between 1 and 65535)")]
    InvalidWindowSize(usize),
}

impl Error {
    /// Whether this error describes damaged or foreign input rather than an
    /// environment or configuration problem.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            Error::TruncatedFile { .. }
                | Error::ChecksumMismatch { .. }
                | Error::MalformedRecord { .. }
                | Error::InvalidBackReference { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corruption_classification() {
        assert!(Error::TruncatedFile { size: 3 }.is_corruption());
        assert!(Error::ChecksumMismatch { expected: 1, found: 2 }.is_corruption());
        assert!(Error::MalformedRecord { body_len: 6 }.is_corruption());
        assert!(Error::InvalidBackReference { offset: 4, length: 2, available: 1 }.is_corruption());
        assert!(!Error::InvalidWindowSize(0).is_corruption());

        let io = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        assert!(!io.is_corruption());
    }

    #[test]
    fn test_checksum_message_is_hex() {
        let err = Error::ChecksumMismatch { expected: 0xCBF4_3926, found: 0x1 };
        assert_eq!(err.to_string(), "CRC32 mismatch: expected 0xcbf43926, got 0x00000001");
    }
}
