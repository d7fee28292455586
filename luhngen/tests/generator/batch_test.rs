#[path = "../common/mod.rs"]
mod common;

use luhngen::pattern::parse;
use luhngen::{CardGenerator, Error, generate, generate_cards};

#[test]
fn output_length_matches_request() {
    for count in [0usize, 1, 7, 25] {
        let cards = generate_cards(common::fixtures::sample_bin(), count).unwrap();
        assert_eq!(cards.len(), count);
    }
}

#[test]
fn default_count_is_ten() {
    let cards = CardGenerator::new()
        .generate_default(common::fixtures::sample_bin())
        .unwrap();
    assert_eq!(cards.len(), 10);
}

#[test]
fn order_follows_rng_stream() {
    // Generating one card at a time from the same stream reproduces the batch
    let parsed = parse(common::fixtures::sample_wildcard_pattern()).unwrap();
    let batch = generate(&parsed, 6, &mut common::helpers::rng(77)).unwrap();

    let mut rng = common::helpers::rng(77);
    let one_by_one: Vec<_> = (0..6)
        .flat_map(|_| generate(&parsed, 1, &mut rng).unwrap())
        .collect();
    assert_eq!(batch, one_by_one);
}

#[test]
fn rejected_pattern_yields_no_cards() {
    match generate_cards("abcxyz", 5) {
        Err(Error::InvalidCharacters { pattern }) => assert_eq!(pattern, "abcxyz"),
        other => panic!("expected InvalidCharacters, got: {:?}", other),
    }
}

#[test]
fn batch_limit_is_enforced_before_parsing() {
    let generator = CardGenerator::builder().max_batch(2).build().unwrap();
    // Even a malformed pattern reports the batch limit first
    match generator.generate("abc", 3) {
        Err(Error::BatchTooLarge { requested: 3, max: 2 }) => {}
        other => panic!("expected BatchTooLarge, got: {:?}", other),
    }
}

#[test]
fn generator_is_shareable_across_threads() {
    let generator = std::sync::Arc::new(CardGenerator::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let generator = generator.clone();
            std::thread::spawn(move || generator.generate("483318", 5))
        })
        .collect();
    for handle in handles {
        let cards = handle.join().unwrap().unwrap();
        common::helpers::assert_cards_match(&cards, "483318", 16);
    }
}
