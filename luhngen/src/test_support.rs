//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize seeded RNG setup and batch assertions so tests
//! across the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::types::GeneratedCard;

/// Deterministic RNG for reproducible generation in tests and benches.
#[doc(hidden)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Panic with a readable message unless every card in `cards` is
/// Luhn-valid, has `len` digits and starts with `prefix`.
#[doc(hidden)]
pub fn assert_cards_match(cards: &[GeneratedCard], prefix: &str, len: usize) {
    for (i, card) in cards.iter().enumerate() {
        assert_eq!(
            card.number().len(),
            len,
            "card {} ({}) has wrong length",
            i,
            card
        );
        assert!(
            card.number().starts_with(prefix),
            "card {} ({}) does not start with {}",
            i,
            card,
            prefix
        );
        assert!(card.is_luhn_valid(), "card {} ({}) fails Luhn", i, card);
    }
}
