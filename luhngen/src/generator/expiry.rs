// luhngen-rs/luhngen/src/generator/expiry.rs

//! Random expiry and CVV fields for cards whose pattern leaves them open.

use rand::Rng;

use crate::constants::MONTH_RANGE;

/// Uniform month, zero-padded: `"01"`..=`"12"`
pub fn random_month<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:02}", rng.random_range(MONTH_RANGE.0..=MONTH_RANGE.1))
}

/// Uniform two-digit year in `range` (inclusive), zero-padded
///
/// # Panics
///
/// Panics if `range.0 > range.1`. [`GeneratorConfig::validate`] rejects
/// such ranges before they reach the generator.
///
/// [`GeneratorConfig::validate`]: crate::generator::GeneratorConfig::validate
pub fn random_year<R: Rng + ?Sized>(rng: &mut R, range: (u8, u8)) -> String {
    format!("{:02}", rng.random_range(range.0..=range.1))
}

/// Uniform CVV in `range` (inclusive)
///
/// # Panics
///
/// Panics if `range.0 > range.1`, as [`random_year`] does.
pub fn random_cvv<R: Rng + ?Sized>(rng: &mut R, range: (u16, u16)) -> String {
    rng.random_range(range.0..=range.1).to_string()
}
