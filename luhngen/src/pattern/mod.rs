// luhngen-rs/luhngen/src/pattern/mod.rs

//! Pattern interpretation: normalize a free-form input, reject malformed
//! ones, and classify the rest into one of three generation modes.
//!
//! Accepted forms:
//!
//! - `483318`: a bare BIN (all digits)
//! - `439383xxxxxx`: a literal pattern with wildcard markers
//! - `483318|12|25|123`: a quad of number, month, year and CVV

use std::fmt;

use log::debug;

use crate::constants::{
    BIN_LEN, CARD_LEN, DELIMITER, MAX_PATTERN_LEN, MIN_PATTERN_LEN, QUAD_MIN_DELIMITERS,
};
use crate::types::Quad;
use crate::utils::{count_digits, has_wildcard, is_wildcard};
use crate::{Error, Result};

pub mod template;

pub use template::{CheckPlacement, Slot, Template};

/// A validated pattern, classified once and consumed by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParsedPattern {
    /// `number|MM|YY|CVV`; `None` fields are drawn per card.
    Quad {
        /// Number segment padded to card length
        template: Template,
        /// Fixed month
        month: Option<String>,
        /// Fixed year
        year: Option<String>,
        /// Fixed CVV
        cvv: Option<String>,
    },
    /// Bare BIN, expanded to a full-length template.
    Bin {
        /// BIN followed by wildcards
        template: Template,
    },
    /// Digits and wildcards, used verbatim.
    Literal {
        /// The pattern as written
        template: Template,
    },
}

impl ParsedPattern {
    /// Number template for every mode
    pub fn template(&self) -> &Template {
        match self {
            ParsedPattern::Quad { template, .. }
            | ParsedPattern::Bin { template }
            | ParsedPattern::Literal { template } => template,
        }
    }

    /// Get mode name as string
    pub fn kind(&self) -> &'static str {
        match self {
            ParsedPattern::Quad { .. } => "quad",
            ParsedPattern::Bin { .. } => "bin",
            ParsedPattern::Literal { .. } => "literal",
        }
    }

    /// Build a quad-mode pattern directly from its fields.
    pub fn from_quad(quad: &Quad) -> Result<Self> {
        let digits = count_digits(&quad.number);
        if digits < BIN_LEN {
            return Err(Error::BinTooShort { digits });
        }
        if quad.number.len() > MAX_PATTERN_LEN {
            return Err(Error::LengthOutOfRange {
                length: quad.number.len(),
                min: MIN_PATTERN_LEN,
                max: MAX_PATTERN_LEN,
            });
        }
        Ok(ParsedPattern::Quad {
            template: Template::padded(&quad.number, CARD_LEN)?,
            month: fixed_field(quad.month.as_deref()),
            year: fixed_field(quad.year.as_deref()),
            cvv: fixed_field(quad.cvv.as_deref()),
        })
    }
}

impl fmt::Display for ParsedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedPattern::Quad {
                template,
                month,
                year,
                cvv,
            } => {
                let field = |v: &Option<String>| v.clone().unwrap_or_else(|| "rnd".to_string());
                write!(
                    f,
                    "quad({}|{}|{}|{})",
                    template,
                    field(month),
                    field(year),
                    field(cvv)
                )
            }
            ParsedPattern::Bin { template } => write!(f, "bin({})", template),
            ParsedPattern::Literal { template } => write!(f, "literal({})", template),
        }
    }
}

/// Remove whitespace from `raw`.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validate `raw` and return the normalized (whitespace-free) pattern.
pub fn validate(raw: &str) -> Result<String> {
    let pattern = normalize(raw);

    if pattern.is_empty()
        || !pattern
            .chars()
            .all(|c| c.is_ascii_digit() || is_wildcard(c) || c == DELIMITER)
    {
        return Err(Error::InvalidCharacters { pattern });
    }

    if pattern.contains(DELIMITER) {
        let first = pattern.split(DELIMITER).next().unwrap_or_default();
        let digits = count_digits(first);
        if digits < BIN_LEN {
            return Err(Error::BinTooShort { digits });
        }

        // A quad bounds its number segment; a partial form is bounded once
        // its delimiters are gone.
        let length = if is_quad(&pattern) {
            first.len()
        } else {
            pattern.len() - pattern.matches(DELIMITER).count()
        };
        if length > MAX_PATTERN_LEN {
            return Err(Error::LengthOutOfRange {
                length,
                min: MIN_PATTERN_LEN,
                max: MAX_PATTERN_LEN,
            });
        }
    } else {
        let digits = count_digits(&pattern);
        if digits < MIN_PATTERN_LEN {
            return Err(Error::InsufficientDigits { digits });
        }
        if !(MIN_PATTERN_LEN..=MAX_PATTERN_LEN).contains(&pattern.len()) {
            return Err(Error::LengthOutOfRange {
                length: pattern.len(),
                min: MIN_PATTERN_LEN,
                max: MAX_PATTERN_LEN,
            });
        }
    }

    Ok(pattern)
}

/// Validate and classify `raw` in one pass.
pub fn parse(raw: &str) -> Result<ParsedPattern> {
    let pattern = validate(raw)?;
    let parsed = classify(&pattern)?;
    debug!("pattern {:?} classified as {}", pattern, parsed);
    Ok(parsed)
}

fn is_quad(pattern: &str) -> bool {
    pattern.matches(DELIMITER).count() >= QUAD_MIN_DELIMITERS
}

/// Empty or wildcard-bearing fields are left to the generator.
fn fixed_field(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.is_empty() && !has_wildcard(v))
        .map(str::to_string)
}

/// Classify an already validated pattern.
fn classify(pattern: &str) -> Result<ParsedPattern> {
    if is_quad(pattern) {
        let mut parts = pattern.split(DELIMITER);
        let mut quad = Quad::new(parts.next().unwrap_or_default());
        quad.month = parts.next().map(str::to_string);
        quad.year = parts.next().map(str::to_string);
        quad.cvv = parts.next().map(str::to_string);
        return ParsedPattern::from_quad(&quad);
    }

    if pattern.contains(DELIMITER) {
        let stripped: String = pattern.chars().filter(|&c| c != DELIMITER).collect();
        return Ok(ParsedPattern::Literal {
            template: Template::parse(&stripped)?,
        });
    }

    if pattern.bytes().all(|b| b.is_ascii_digit()) {
        let template = if pattern.len() >= CARD_LEN {
            Template::parse(pattern)?
        } else {
            Template::padded(&pattern[..BIN_LEN], CARD_LEN - 1)?
        };
        return Ok(ParsedPattern::Bin { template });
    }

    Ok(ParsedPattern::Literal {
        template: Template::parse(pattern)?,
    })
}
