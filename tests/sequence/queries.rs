//! Integration tests for terminal queries
//!
//! Tests any, all, find, reduce, and count.

use rill_sequence::IntSequence;

fn is_even(x: i64) -> bool {
    x % 2 == 0
}

fn is_odd(x: i64) -> bool {
    x % 2 != 0
}

// =============================================================================
// Any / All
// =============================================================================

#[test]
fn any_true_when_a_match_exists() {
    let s = IntSequence::range(1, 5).unwrap();
    assert!(s.any(is_even));
}

#[test]
fn any_false_when_nothing_matches() {
    let s = IntSequence::range(1, 5).unwrap();
    assert!(!s.any(|x| x > 100));
}

#[test]
fn any_false_on_empty() {
    let empty = IntSequence::range(1, 5).unwrap().filter(|_| false);
    assert!(!empty.any(|_| true));
}

#[test]
fn all_true_when_every_element_matches() {
    let evens = IntSequence::range(1, 20).unwrap().filter(is_even);
    assert!(evens.all(is_even));
}

#[test]
fn all_false_on_a_single_failure() {
    let s = IntSequence::range(1, 5).unwrap();
    assert!(!s.all(is_even));
}

#[test]
fn all_vacuously_true_on_empty() {
    let empty = IntSequence::range(1, 5).unwrap().filter(|_| false);
    assert!(empty.all(|_| false));
}

// =============================================================================
// Find
// =============================================================================

#[test]
fn find_returns_first_match_in_order() {
    let s = IntSequence::range(2, 6).unwrap();
    assert_eq!(s.find(is_odd), Some(3));
}

#[test]
fn find_returns_none_without_match() {
    let s = IntSequence::range(1, 5).unwrap();
    assert_eq!(s.find(|x| x > 10), None);
}

#[test]
fn find_zero_is_not_ambiguous() {
    let s = IntSequence::range(-2, 3).unwrap();
    assert_eq!(s.find(|x| x == 0), Some(0));
    assert_eq!(s.find(|x| x == 99), None);
}

// =============================================================================
// Reduce / Count
// =============================================================================

#[test]
fn reduce_computes_a_product() {
    let factorial = IntSequence::range_inclusive(1, 4)
        .unwrap()
        .reduce(1, |acc, x| acc * x);
    assert_eq!(factorial, 24);
}

#[test]
fn reduce_on_empty_returns_initial() {
    let empty = IntSequence::range(1, 10).unwrap().filter(|_| false);
    assert_eq!(empty.reduce(7, |acc, x| acc + x), 7);
}

#[test]
fn reduce_into_a_different_accumulator_type() {
    let rendered = IntSequence::range(1, 4).unwrap().reduce(
        String::new(),
        |mut acc, x| {
            if !acc.is_empty() {
                acc.push(',');
            }
            acc.push_str(&x.to_string());
            acc
        },
    );
    assert_eq!(rendered, "1,2,3");
}

#[test]
fn count_matches_generated_length() {
    assert_eq!(IntSequence::range(1, 150).unwrap().count(), 149);
    assert_eq!(IntSequence::range_inclusive(1, 150).unwrap().count(), 150);
}
