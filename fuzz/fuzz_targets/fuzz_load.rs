#![no_main]

use libfuzzer_sys::fuzz_target;
use lz77crc::format::parse_tokens;
use lz77crc::{decompress, inspect};

fuzz_target!(|data: &[u8]| {
    // Parsing may fail on invalid input - that's OK
    // We're looking for panics/crashes, not errors
    if let Ok(tokens) = parse_tokens(data) {
        let summary = inspect(data);
        let decoded = decompress(&tokens);
        assert_eq!(summary.is_ok(), decoded.is_ok());
    }
});
