#[path = "../common/mod.rs"]
mod common;

use luhngen::checksum::{check_digit, check_digit_str, is_valid, luhn_sum};
use luhngen::utils::digits_of;
use proptest::prelude::*;

#[test]
fn known_numbers_validate() {
    for n in common::fixtures::valid_numbers() {
        assert!(is_valid(n), "{} should be valid", n);
    }
    for n in common::fixtures::invalid_numbers() {
        assert!(!is_valid(&n), "{} should be invalid", n);
    }
}

#[test]
fn recomputing_last_digit_reproduces_it() {
    for n in common::fixtures::valid_numbers() {
        let (body, last) = n.split_at(n.len() - 1);
        let expected: u8 = last.parse().unwrap();
        assert_eq!(check_digit_str(body).unwrap(), expected, "number {}", n);
    }
}

#[test]
fn empty_partial_yields_zero() {
    assert_eq!(check_digit(&[]), 0);
    assert_eq!(check_digit_str("").unwrap(), 0);
}

proptest! {
    #[test]
    fn check_digit_makes_number_valid(partial in "[0-9]{1,19}") {
        let c = check_digit_str(&partial).unwrap();
        let full = format!("{}{}", partial, c);
        prop_assert!(is_valid(&full));
    }

    #[test]
    fn sixteen_digit_round_trip(partial in "[0-9]{15}") {
        let digits = digits_of(&partial).unwrap();
        let mut full = digits.clone();
        full.push(check_digit(&digits));
        prop_assert_eq!(luhn_sum(&full) % 10, 0);
        // Drop the check digit and recompute it
        let last = full.pop().unwrap();
        prop_assert_eq!(check_digit(&full), last);
    }
}
