#![no_main]

use libfuzzer_sys::fuzz_target;
use lz77crc::format::{parse_tokens, serialize};
use lz77crc::lz77::{decode, encode};

fuzz_target!(|data: &[u8]| {
    // First two bytes pick the window, the rest is the input
    if data.len() < 2 {
        return;
    }
    let window = (u16::from_le_bytes([data[0], data[1]]) as usize).max(1);

    // Limit data size to avoid slowdowns
    let input = &data[2..];
    let input = if input.len() > 16 * 1024 { &input[..16 * 1024] } else { input };

    let tokens = encode(input, window);
    let file = serialize(&tokens);
    let parsed = parse_tokens(&file).expect("serialized tokens should parse");
    assert_eq!(parsed, tokens);

    let decoded = decode(&parsed).expect("encoder output should decode");
    assert_eq!(decoded, input, "Round-trip mismatch");
});
