//! Utilities for luhngen: small, reusable helpers used across the crate.

pub mod digits;

pub use digits::*;
