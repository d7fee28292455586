// luhngen-rs/luhngen/src/checksum.rs

//! Luhn (mod 10) check digits and validation.

use crate::utils::digits_of;
use crate::{Error, Result};

/// Weight of digit `d` at `offset` from the right end of a full number:
/// odd offsets are doubled, with 9 subtracted when the result exceeds 9.
fn weighted(offset: usize, d: u8) -> u32 {
    let d = u32::from(d);
    if offset % 2 == 1 {
        let doubled = d * 2;
        if doubled > 9 { doubled - 9 } else { doubled }
    } else {
        d
    }
}

/// Luhn sum over a complete digit sequence.
pub fn luhn_sum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| weighted(i, d))
        .sum()
}

/// Compute the Luhn check digit for `partial` (the number without its final
/// digit). Empty input yields 0.
pub fn check_digit(partial: &[u8]) -> u8 {
    // The check digit takes offset 0, so `partial` starts at offset 1.
    let sum = partial
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| weighted(i + 1, d))
        .sum::<u32>();
    ((10 - sum % 10) % 10) as u8
}

/// String form of [`check_digit`]. Rejects anything but ASCII digits.
pub fn check_digit_str(partial: &str) -> Result<u8> {
    let digits = digits_of(partial).ok_or_else(|| Error::InvalidCharacters {
        pattern: partial.to_string(),
    })?;
    Ok(check_digit(&digits))
}

/// Validate a complete number: non-empty, digits only, Luhn sum divisible by 10.
pub fn is_valid(number: &str) -> bool {
    match digits_of(number) {
        Some(digits) if !digits.is_empty() => luhn_sum(&digits) % 10 == 0,
        _ => false,
    }
}
