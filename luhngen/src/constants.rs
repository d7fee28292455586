// luhngen-rs/luhngen/src/constants.rs
//! Common generation constants used across the crate

/// Wildcard markers accepted in patterns. Generated output always uses `x`.
pub const WILDCARD: char = 'x';
/// Upper-case wildcard marker, accepted on input only
pub const WILDCARD_UPPER: char = 'X';

/// Field delimiter for the `number|MM|YY|CVV` form
pub const DELIMITER: char = '|';

/// Minimum delimiters for a pattern to be read as a full quad
pub const QUAD_MIN_DELIMITERS: usize = 3;

/// Number of leading digits kept from a bare BIN
pub const BIN_LEN: usize = 6;

/// Working card length (prefix + wildcards + check digit)
pub const CARD_LEN: usize = 16;

/// Shortest accepted non-quad pattern
pub const MIN_PATTERN_LEN: usize = 6;
/// Longest accepted pattern or card number
pub const MAX_PATTERN_LEN: usize = 19;

/// Random expiry month range (inclusive)
pub const MONTH_RANGE: (u8, u8) = (1, 12);

/// Random expiry year range as two-digit values (inclusive), read as 20YY
pub const YEAR_RANGE: (u8, u8) = (23, 33);

/// Random CVV range (inclusive)
pub const CVV_RANGE: (u16, u16) = (100, 999);

/// Cards produced per request when the caller does not say otherwise
pub const DEFAULT_COUNT: usize = 10;

/// Largest batch a single call may request
pub const MAX_BATCH: usize = 1000;
