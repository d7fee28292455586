//! Decimal digit helpers shared by the checksum, pattern and generator code.
//!
//! Digits are carried around as `u8` values in `0..=9`; these helpers convert
//! between that form and strings without going through integer parsing.

use crate::constants::{WILDCARD, WILDCARD_UPPER};

/// Convert a string of ASCII digits to digit values.
///
/// Returns `None` if any character is not an ASCII digit.
///
/// Example: `"407"` -> `Some(vec![4, 0, 7])`
pub fn digits_of(s: &str) -> Option<Vec<u8>> {
    s.bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect()
}

/// Render digit values as a string. Values above 9 are reduced mod 10.
pub fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d % 10)).collect()
}

/// Number of ASCII digits in `s`.
pub fn count_digits(s: &str) -> usize {
    s.bytes().filter(u8::is_ascii_digit).count()
}

/// True for either wildcard marker (`x` or `X`).
pub fn is_wildcard(c: char) -> bool {
    c == WILDCARD || c == WILDCARD_UPPER
}

/// True if `s` contains at least one wildcard marker.
pub fn has_wildcard(s: &str) -> bool {
    s.chars().any(is_wildcard)
}
