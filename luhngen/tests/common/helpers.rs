// helpers.rs — logger and RNG setup reused across integration tests

use rand::rngs::StdRng;

pub use luhngen::test_support::assert_cards_match;

/// Install env_logger once; later calls are no-ops.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn rng(seed: u64) -> StdRng {
    init_logger();
    luhngen::test_support::seeded_rng(seed)
}
