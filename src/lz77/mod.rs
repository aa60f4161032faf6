pub mod decoder;
pub mod encoder;
pub mod matcher;
pub mod tokens;

pub use decoder::{decode, Decoder};
pub use encoder::encode;
pub use matcher::{find_longest_match, Match};
pub use tokens::{Token, TokenCounts};

/// Default lookback window in bytes
pub const DEFAULT_WINDOW_SIZE: usize = 4096;

/// Largest window representable by the 16-bit offset field
pub const MAX_WINDOW_SIZE: usize = u16::MAX as usize;

/// Longest match representable by the 16-bit length field
pub const MAX_MATCH_LENGTH: usize = u16::MAX as usize;
