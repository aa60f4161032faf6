#![no_main]

use libfuzzer_sys::fuzz_target;
use lz77crc::lz77::{Decoder, Token};

fuzz_target!(|data: &[u8]| {
    // Treat the input as raw token records, skipping the trailer check
    let tokens: Vec<Token> = data
        .chunks_exact(Token::SERIALIZED_SIZE)
        .map(|chunk| Token::from_bytes(chunk.try_into().unwrap()))
        .collect();

    let mut decoder = Decoder::new();
    assert!(decoder.is_empty());
    for token in &tokens {
        let before = decoder.output().to_vec();
        match decoder.push(token) {
            Ok(()) => assert_eq!(decoder.len(), before.len() + token.uncompressed_size()),
            // Invalid references are fine, but must not touch the output
            Err(_) => {
                assert_eq!(decoder.output(), &before[..]);
                break;
            }
        }
    }
});
