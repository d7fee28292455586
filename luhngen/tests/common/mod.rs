// Shared helpers for the integration test crates under `tests/`.
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
