//! Display width of `char` and `str` values

use crate::classifier::{sequence_width, sequence_width_cjk, width, width_cjk};
use crate::types::Width;

/// Column width of a `char`
pub fn char_width(c: char) -> Width {
    width(c.into())
}

/// Column width of a `char`, with East Asian Ambiguous characters double-width
pub fn char_width_cjk(c: char) -> Width {
    width_cjk(c.into())
}

/// Return the display width of a string, or `None` if it contains a
/// control character or combining mark.
pub fn display_width(s: &str) -> Option<usize> {
    sequence_width(s.chars().map(u32::from), None)
}

/// As [`display_width`], with East Asian Ambiguous characters double-width
pub fn display_width_cjk(s: &str) -> Option<usize> {
    sequence_width_cjk(s.chars().map(u32::from))
}

/// Longest prefix of `s` that fits within `max_width` columns
///
/// A wide character that would straddle the limit is left out. Returns
/// `None` if a non-printable character is reached before the limit.
pub fn truncate_to_width(s: &str, max_width: usize) -> Option<&str> {
    let mut used = 0;
    for (byte_pos, c) in s.char_indices() {
        let cw = char_width(c).columns()?;
        if used + cw > max_width {
            return Some(&s[..byte_pos]);
        }
        used += cw;
    }
    Some(s)
}
