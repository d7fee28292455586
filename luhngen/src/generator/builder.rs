// luhngen-rs/luhngen/src/generator/builder.rs

//! Generator configuration and its builder.

use crate::constants::{CVV_RANGE, DEFAULT_COUNT, MAX_BATCH, YEAR_RANGE};
use crate::generator::CardGenerator;
use crate::{Error, Result};

/// Runtime settings for [`CardGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Two-digit expiry years drawn when a pattern leaves the year open
    pub year_range: (u8, u8),
    /// CVVs drawn when a pattern leaves the CVV open
    pub cvv_range: (u16, u16),
    /// Largest batch accepted by one call
    pub max_batch: usize,
    /// Batch size used by [`CardGenerator::generate_default`]
    pub default_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            year_range: YEAR_RANGE,
            cvv_range: CVV_RANGE,
            max_batch: MAX_BATCH,
            default_count: DEFAULT_COUNT,
        }
    }
}

impl GeneratorConfig {
    /// Check that every range is ordered and produces well-formed fields.
    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = self.year_range;
        if lo > hi || hi > 99 {
            return Err(Error::InvalidConfig(format!(
                "year range {}..={} must be ordered two-digit values",
                lo, hi
            )));
        }

        let (lo, hi) = self.cvv_range;
        if lo > hi || lo < 100 || hi > 9999 {
            return Err(Error::InvalidConfig(format!(
                "cvv range {}..={} must be ordered 3 or 4 digit values",
                lo, hi
            )));
        }

        if self.max_batch == 0 {
            return Err(Error::InvalidConfig("max_batch must be at least 1".into()));
        }
        if self.default_count > self.max_batch {
            return Err(Error::InvalidConfig(format!(
                "default_count {} exceeds max_batch {}",
                self.default_count, self.max_batch
            )));
        }
        Ok(())
    }
}

/// Helper to construct a CardGenerator with optional configuration.
#[derive(Debug, Default)]
pub struct GeneratorBuilder {
    config: GeneratorConfig,
}

impl GeneratorBuilder {
    /// Builder over the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration instead of the defaults
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Inclusive range for drawn years
    pub fn year_range(mut self, lo: u8, hi: u8) -> Self {
        self.config.year_range = (lo, hi);
        self
    }

    /// Inclusive range for drawn CVVs
    pub fn cvv_range(mut self, lo: u16, hi: u16) -> Self {
        self.config.cvv_range = (lo, hi);
        self
    }

    /// Largest batch one call may request
    pub fn max_batch(mut self, max: usize) -> Self {
        self.config.max_batch = max;
        self
    }

    /// Batch size for `generate_default`
    pub fn default_count(mut self, count: usize) -> Self {
        self.config.default_count = count;
        self
    }

    /// Consume the builder and return a generator.
    /// Fails with InvalidConfig if any setting is out of range.
    pub fn build(self) -> Result<CardGenerator> {
        CardGenerator::with_config(self.config)
    }
}
