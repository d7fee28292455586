// luhngen-rs/luhngen/src/pattern/template.rs

//! Slot templates and check-digit placement.

use std::fmt;

use crate::checksum::check_digit;
use crate::constants::{CARD_LEN, WILDCARD};
use crate::utils::is_wildcard;
use crate::{Error, Result};

/// One position of a number template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A digit copied into every output
    Fixed(u8),
    /// A wildcard filled per card
    Wild,
}

/// Where the Luhn check digit goes once the wildcards are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckPlacement {
    /// Computed over every slot and appended: output is one digit longer.
    Append,
    /// The last slot is reserved for the check digit and recomputed.
    ReplaceLast,
}

/// Digit/wildcard sequence that a card number is synthesized from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    slots: Vec<Slot>,
    check: CheckPlacement,
}

impl Template {
    /// Parse a delimiter-free pattern of digits and wildcard markers.
    pub fn parse(pattern: &str) -> Result<Self> {
        let slots = pattern
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) => Ok(Slot::Fixed(d as u8)),
                None if is_wildcard(c) => Ok(Slot::Wild),
                None => Err(Error::InvalidCharacters {
                    pattern: pattern.to_string(),
                }),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_slots(slots))
    }

    /// Parse `pattern` and right-pad it with wildcards up to `len` slots.
    pub fn padded(pattern: &str, len: usize) -> Result<Self> {
        let mut slots = Self::parse(pattern)?.slots;
        if slots.len() < len {
            slots.resize(len, Slot::Wild);
        }
        Ok(Self::from_slots(slots))
    }

    /// A template with no wildcards always recomputes its final digit. One
    /// with wildcards reserves the final slot only at full card length.
    pub fn from_slots(slots: Vec<Slot>) -> Self {
        let has_wild = slots.contains(&Slot::Wild);
        let check = if !has_wild || slots.len() >= CARD_LEN {
            CheckPlacement::ReplaceLast
        } else {
            CheckPlacement::Append
        };
        Self { slots, check }
    }

    /// All slots, check position included
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// How the check digit is placed
    pub fn check_placement(&self) -> CheckPlacement {
        self.check
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when there are no slots
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots that precede the check digit
    fn body(&self) -> &[Slot] {
        match self.check {
            CheckPlacement::Append => &self.slots,
            CheckPlacement::ReplaceLast => &self.slots[..self.slots.len().saturating_sub(1)],
        }
    }

    /// Wildcards that [`fill`](Self::fill) will draw a digit for
    pub fn wildcard_count(&self) -> usize {
        self.body().iter().filter(|s| **s == Slot::Wild).count()
    }

    /// Length of every number produced from this template
    pub fn output_len(&self) -> usize {
        self.body().len() + 1
    }

    /// Leading fixed digits, up to the first wildcard
    pub fn fixed_prefix(&self) -> Vec<u8> {
        self.slots
            .iter()
            .map_while(|s| match s {
                Slot::Fixed(d) => Some(*d),
                Slot::Wild => None,
            })
            .collect()
    }

    /// Build a complete number: wildcards take successive values from
    /// `random`, then the check digit is placed. Returns `None` if `random`
    /// runs out before every wildcard is filled.
    pub fn fill<I>(&self, random: I) -> Option<Vec<u8>>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut random = random.into_iter();
        let mut number = self
            .body()
            .iter()
            .map(|slot| match slot {
                Slot::Fixed(d) => Some(*d),
                Slot::Wild => random.next().map(|d| d % 10),
            })
            .collect::<Option<Vec<u8>>>()?;
        number.push(check_digit(&number));
        Some(number)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Slot::Fixed(d) => write!(f, "{}", d)?,
                Slot::Wild => write!(f, "{}", WILDCARD)?,
            }
        }
        Ok(())
    }
}
