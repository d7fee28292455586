// luhngen-rs/luhngen/src/prelude.rs

//! Common imports: `use luhngen::prelude::*;`

pub use crate::checksum::{check_digit, check_digit_str, is_valid};
pub use crate::generator::{
    CardGenerator, GeneratorBuilder, GeneratorConfig, generate, generate_cards,
};
pub use crate::pattern::{ParsedPattern, Template, parse, validate};
pub use crate::{Error, GeneratedCard, Quad, Result};
