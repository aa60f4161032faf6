//! Longest-match search over a bounded lookback window.
//!
//! Candidates are visited nearest-first, from `position - 1` down to
//! `position - window_size`, and a candidate only replaces the current best
//! when it is strictly longer. Equal-length matches therefore resolve to the
//! smallest offset, which keeps the encoded token stream stable for a given
//! input and window.

use super::MAX_MATCH_LENGTH;

/// Result of a match search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Match {
    /// Distance back from the current position to the match start (0 = no match)
    pub offset: usize,
    /// Number of matching bytes
    pub length: usize,
}

impl Match {
    pub const NONE: Match = Match { offset: 0, length: 0 };

    pub fn is_some(&self) -> bool {
        self.length > 0
    }
}

/// Find the longest earlier occurrence of the bytes starting at `position`.
///
/// The candidate run must end before `position`, so a match never overlaps
/// the bytes it is describing. Lengths are capped at [`MAX_MATCH_LENGTH`].
/// Returns [`Match::NONE`] when nothing in the window matches even one byte.
pub fn find_longest_match(buffer: &[u8], position: usize, window_size: usize) -> Match {
    if position >= buffer.len() {
        return Match::NONE;
    }

    let window_start = position.saturating_sub(window_size);
    let lookahead = &buffer[position..];
    let max_len = lookahead.len().min(MAX_MATCH_LENGTH);
    let first = lookahead[0];

    let mut best = Match::NONE;
    let mut search_end = position;

    // Only candidates starting with the same byte can produce a non-empty match,
    // so jump straight to them (nearest first).
    while let Some(idx) = memchr::memrchr(first, &buffer[window_start..search_end]) {
        let candidate = window_start + idx;
        let reach = (position - candidate).min(max_len);
        let length = common_prefix(&buffer[candidate..candidate + reach], &lookahead[..reach]);

        if length > best.length {
            best = Match { offset: position - candidate, length };
            if length == max_len {
                break;
            }
        }

        search_end = candidate;
    }

    best
}

#[inline]
fn common_prefix(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
