use super::matcher::find_longest_match;
use super::tokens::Token;
use super::MAX_WINDOW_SIZE;

/// Encode a buffer into LZ77 tokens.
///
/// Every back-reference carries the byte that follows it, so a match is only
/// taken when at least one byte remains after it. A match that would end
/// exactly at the end of the buffer is dropped in favour of a literal.
///
/// `window_size` is clamped to [`MAX_WINDOW_SIZE`] so offsets fit their
/// 16-bit field.
pub fn encode(buffer: &[u8], window_size: usize) -> Vec<Token> {
    let window_size = window_size.min(MAX_WINDOW_SIZE);
    let mut tokens = Vec::new();
    let mut position = 0;

    while position < buffer.len() {
        let m = find_longest_match(buffer, position, window_size);

        if m.is_some() && position + m.length < buffer.len() {
            // Both fit in u16: offset <= window_size, length <= MAX_MATCH_LENGTH
            tokens.push(Token::copy(m.offset as u16, m.length as u16, buffer[position + m.length]));
            position += m.length + 1;
        } else {
            tokens.push(Token::literal(buffer[position]));
            position += 1;
        }
    }

    log::debug!("Encoded {} bytes into {} tokens (window {})", buffer.len(), tokens.len(), window_size);

    tokens
}
