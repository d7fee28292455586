#[path = "../common/mod.rs"]
mod common;

use luhngen::Quad;
use luhngen::pattern::{CheckPlacement, ParsedPattern, parse};

#[test]
fn bare_bin_keeps_first_six_digits() {
    let parsed = parse("48331899").unwrap();
    assert_eq!(parsed.kind(), "bin");
    assert_eq!(parsed.template().to_string(), "483318xxxxxxxxx");
    assert_eq!(parsed.template().output_len(), 16);
}

#[test]
fn long_digit_run_is_used_as_is() {
    let parsed = parse("4111111111111112").unwrap();
    assert_eq!(parsed.kind(), "bin");
    assert_eq!(
        parsed.template().check_placement(),
        CheckPlacement::ReplaceLast
    );
    assert_eq!(parsed.template().output_len(), 16);
}

#[test]
fn quad_pads_number_to_card_length() {
    match parse(common::fixtures::sample_quad()).unwrap() {
        ParsedPattern::Quad { template, .. } => {
            assert_eq!(template.len(), 16);
            assert_eq!(template.output_len(), 16);
            assert_eq!(template.fixed_prefix(), vec![4, 8, 3, 3, 1, 8]);
        }
        other => panic!("expected Quad, got: {:?}", other),
    }
}

#[test]
fn quad_ignores_segments_past_the_fourth() {
    let a = parse("483318|12|25|123|999|888").unwrap();
    let b = parse("483318|12|25|123").unwrap();
    assert_eq!(a, b);
}

#[test]
fn quad_from_struct_matches_parsed() {
    let quad = Quad::new("483318").month("12").year("25").cvv("123");
    assert_eq!(
        ParsedPattern::from_quad(&quad).unwrap(),
        parse("483318|12|25|123").unwrap()
    );
}

#[test]
fn partial_delimited_input_is_literal() {
    let parsed = parse("483318|xx").unwrap();
    assert_eq!(parsed.kind(), "literal");
    assert_eq!(parsed.template().to_string(), "483318xx");
    assert_eq!(parsed.template().check_placement(), CheckPlacement::Append);
}

#[test]
fn full_length_wildcard_reserves_check_slot() {
    let parsed = parse(common::fixtures::sample_wildcard_pattern()).unwrap();
    assert_eq!(parsed.kind(), "literal");
    assert_eq!(
        parsed.template().check_placement(),
        CheckPlacement::ReplaceLast
    );
    assert_eq!(parsed.template().wildcard_count(), 9);
}
