//! Set judge tests.
//!
//! These exercise `is_valid_set` directly, over the whole card space and
//! with property tests.

use proptest::prelude::*;
use set_engine::cards::Value::{A, B, C};
use set_engine::rules::broken_attributes;
use set_engine::{all_cards, is_valid_set, Attribute, Card};

fn any_card() -> impl Strategy<Value = Card> {
    (0u8..81).prop_map(|i| Card::from_index(i).unwrap())
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_only_color_varies() {
    // number=(1,1,1), shape=(1,1,1), color=(1,2,3), fill=(1,1,1)
    let a = Card::new(A, A, A, A);
    let b = Card::new(A, A, B, A);
    let c = Card::new(A, A, C, A);
    assert!(is_valid_set(&a, &b, &c));
}

#[test]
fn test_number_pair_fails_regardless_of_others() {
    // number=(1,1,2); every other attribute forms a valid pattern
    let a = Card::new(A, A, A, A);
    let b = Card::new(A, B, A, B);
    let c = Card::new(B, C, A, C);
    assert!(!is_valid_set(&a, &b, &c));
    assert_eq!(broken_attributes(&a, &b, &c), vec![Attribute::Number]);
}

#[test]
fn test_all_four_attributes_distinct() {
    let a = Card::new(A, A, A, A);
    let b = Card::new(B, B, B, B);
    let c = Card::new(C, C, C, C);
    assert!(is_valid_set(&a, &b, &c));
}

// =============================================================================
// Exhaustive
// =============================================================================

#[test]
fn test_every_pair_has_exactly_one_completion() {
    let deck: Vec<Card> = all_cards().collect();
    for (i, a) in deck.iter().enumerate() {
        for b in deck.iter().skip(i + 1) {
            let completions: Vec<&Card> = deck.iter().filter(|c| is_valid_set(a, b, c)).collect();
            assert_eq!(completions.len(), 1, "pair {a:?} {b:?}");
            assert_eq!(*completions[0], a.complete(b));
            assert_ne!(completions[0], a);
            assert_ne!(completions[0], b);
        }
    }
}

#[test]
fn test_single_attribute_change_breaks_set() {
    let a = Card::new(A, B, C, A);
    let b = Card::new(B, B, A, C);
    let c = a.complete(&b);
    assert!(is_valid_set(&a, &b, &c));

    for attr in Attribute::ALL {
        let mut values = c.values();
        for other in [A, B, C] {
            if other == c.value(attr) {
                continue;
            }
            values[attr.index()] = other;
            let wrong = Card::new(values[0], values[1], values[2], values[3]);
            assert!(!is_valid_set(&a, &b, &wrong), "{attr} changed to {other:?}");
        }
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_symmetric_under_permutation(a in any_card(), b in any_card(), c in any_card()) {
        let expected = is_valid_set(&a, &b, &c);
        prop_assert_eq!(is_valid_set(&a, &c, &b), expected);
        prop_assert_eq!(is_valid_set(&b, &a, &c), expected);
        prop_assert_eq!(is_valid_set(&b, &c, &a), expected);
        prop_assert_eq!(is_valid_set(&c, &a, &b), expected);
        prop_assert_eq!(is_valid_set(&c, &b, &a), expected);
    }

    #[test]
    fn prop_completion_is_valid(a in any_card(), b in any_card()) {
        prop_assert!(is_valid_set(&a, &b, &a.complete(&b)));
    }

    #[test]
    fn prop_valid_iff_no_broken_attribute(a in any_card(), b in any_card(), c in any_card()) {
        prop_assert_eq!(is_valid_set(&a, &b, &c), broken_attributes(&a, &b, &c).is_empty());
    }
}
