// luhngen-rs/luhngen/src/generator/mod.rs

//! Card synthesis: expand a classified pattern into Luhn-valid cards.
//!
//! Every entry point takes its randomness from a caller-supplied
//! [`rand::Rng`]; the `*_with` variants accept one explicitly (a seeded
//! `StdRng` makes output reproducible), the others draw from `rand::rng()`.
//! A batch is all-or-nothing: the first failure discards every card
//! generated so far.

use log::{debug, trace, warn};
use rand::Rng;

use crate::checksum;
use crate::pattern::{self, ParsedPattern};
use crate::types::GeneratedCard;
use crate::utils::digits_to_string;
use crate::{Error, Result};

pub mod builder;
pub mod expiry;

pub use builder::{GeneratorBuilder, GeneratorConfig};
pub use expiry::{random_cvv, random_month, random_year};

/// Configured card generator. Holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct CardGenerator {
    config: GeneratorConfig,
}

impl CardGenerator {
    /// Generator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a [`GeneratorBuilder`]
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// Create a generator from `config`, validating it first.
    pub fn with_config(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate `count` cards from a raw pattern using the thread RNG.
    pub fn generate(&self, pattern: &str, count: usize) -> Result<Vec<GeneratedCard>> {
        self.generate_with(pattern, count, &mut rand::rng())
    }

    /// Generate the configured default number of cards.
    pub fn generate_default(&self, pattern: &str) -> Result<Vec<GeneratedCard>> {
        self.generate(pattern, self.config.default_count)
    }

    /// Generate `count` cards from a raw pattern using `rng`.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        pattern: &str,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<GeneratedCard>> {
        self.check_batch(count)?;
        let parsed = pattern::parse(pattern).inspect_err(|e| {
            warn!("rejected pattern {:?}: {}", pattern, e);
        })?;
        self.generate_parsed(&parsed, count, rng)
    }

    /// Generate `count` cards from an already classified pattern.
    pub fn generate_parsed<R: Rng + ?Sized>(
        &self,
        parsed: &ParsedPattern,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<GeneratedCard>> {
        self.check_batch(count)?;
        self.generate_batch(parsed, count, rng, |rng, n| {
            (0..n).map(|_| rng.random_range(0..10u8)).collect()
        })
    }

    /// Run a batch where `draw(rng, n)` supplies the `n` wildcard digits of
    /// each card. The first failing card discards the whole batch.
    fn generate_batch<R, D>(
        &self,
        parsed: &ParsedPattern,
        count: usize,
        rng: &mut R,
        mut draw: D,
    ) -> Result<Vec<GeneratedCard>>
    where
        R: Rng + ?Sized,
        D: FnMut(&mut R, usize) -> Vec<u8>,
    {
        let wildcards = parsed.template().wildcard_count();
        let cards = (0..count)
            .map(|_| {
                let digits = draw(&mut *rng, wildcards);
                self.synthesize_from(parsed, digits, rng)
            })
            .collect::<Result<Vec<_>>>();

        match &cards {
            Ok(cards) => debug!("generated {} card(s) from {}", cards.len(), parsed),
            Err(e) => warn!("batch of {} from {} aborted: {}", count, parsed, e),
        }
        cards
    }

    fn check_batch(&self, count: usize) -> Result<()> {
        if count > self.config.max_batch {
            warn!(
                "batch of {} exceeds maximum {}",
                count, self.config.max_batch
            );
            return Err(Error::BatchTooLarge {
                requested: count,
                max: self.config.max_batch,
            });
        }
        Ok(())
    }

    /// Build one card: fill the wildcards from `digits`, place the check
    /// digit, then take fixed quad fields or draw fresh ones.
    fn synthesize_from<R, I>(
        &self,
        parsed: &ParsedPattern,
        digits: I,
        rng: &mut R,
    ) -> Result<GeneratedCard>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = u8>,
    {
        let digits = parsed
            .template()
            .fill(digits)
            .ok_or_else(|| Error::GenerationFailure("random digit stream ended early".into()))?;

        let number = digits_to_string(&digits);
        if !checksum::is_valid(&number) {
            return Err(Error::GenerationFailure(format!(
                "synthesized number {} failed the Luhn check",
                number
            )));
        }

        let (month, year, cvv) = match parsed {
            ParsedPattern::Quad {
                month, year, cvv, ..
            } => (
                month.clone().unwrap_or_else(|| random_month(rng)),
                year.clone()
                    .unwrap_or_else(|| random_year(rng, self.config.year_range)),
                cvv.clone()
                    .unwrap_or_else(|| random_cvv(rng, self.config.cvv_range)),
            ),
            ParsedPattern::Bin { .. } | ParsedPattern::Literal { .. } => (
                random_month(rng),
                random_year(rng, self.config.year_range),
                random_cvv(rng, self.config.cvv_range),
            ),
        };

        trace!("synthesized {}|{}|{}|{}", number, month, year, cvv);
        Ok(GeneratedCard::new(number, month, year, cvv))
    }
}

/// Generate `count` cards from a classified pattern with the default
/// configuration and the given RNG.
pub fn generate<R: Rng + ?Sized>(
    parsed: &ParsedPattern,
    count: usize,
    rng: &mut R,
) -> Result<Vec<GeneratedCard>> {
    CardGenerator::new().generate_parsed(parsed, count, rng)
}

/// Validate `pattern` and generate `count` cards with the default
/// configuration and the thread RNG.
pub fn generate_cards(pattern: &str, count: usize) -> Result<Vec<GeneratedCard>> {
    CardGenerator::new().generate(pattern, count)
}
