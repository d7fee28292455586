// luhngen-rs/luhngen/src/lib.rs

//! luhngen
//!
//! Pattern-driven generator for Luhn-valid test card numbers.
#![warn(missing_docs)]

pub mod checksum;
pub mod constants;
pub mod error;
pub mod generator;
pub mod pattern;
pub mod prelude;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the records in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
