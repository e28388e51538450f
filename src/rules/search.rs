//! Possibility search: is there a set among the cards on the table?
//!
//! Any two distinct cards are completed by exactly one third card
//! (`Card::complete`), so instead of judging all C(n, 3) triples the
//! pair-lookup search walks the C(n, 2) pairs and looks the completing card
//! up in a hash index. The brute-force scan is kept as a reference.
//!
//! ## Witness order
//!
//! Both searches return the same witness: the first pair `(i, j)`, `i < j`,
//! in slice order whose completing card sits at some `k > j`. Since a pair
//! has at most one completion, lexicographic `(i, j, k)` order and pair
//! order pick the same triple.
//!
//! Input cards are assumed distinct, as they are on a table.

use rustc_hash::FxHashMap;

use super::judge::is_valid_set;
use crate::cards::Card;

/// Three cards forming a set, in the order they appear in the input.
pub type Triple = [Card; 3];

/// A strategy for finding sets among cards.
pub trait SetFinder {
    /// First set in canonical enumeration order, if any.
    fn find(&self, cards: &[Card]) -> Option<Triple>;

    /// Whether any set exists.
    fn exists(&self, cards: &[Card]) -> bool {
        self.find(cards).is_some()
    }
}

/// O(n²) search: complete every pair and look the third card up.
#[derive(Clone, Copy, Debug, Default)]
pub struct PairLookup;

impl SetFinder for PairLookup {
    fn find(&self, cards: &[Card]) -> Option<Triple> {
        let index = index_cards(cards);
        for (i, first) in cards.iter().enumerate() {
            for (j, second) in cards.iter().enumerate().skip(i + 1) {
                let wanted = first.complete(second);
                if let Some(&k) = index.get(&wanted) {
                    if k > j {
                        return Some([*first, *second, cards[k]]);
                    }
                }
            }
        }
        None
    }
}

/// O(n³) reference search over every triple using the set judge.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForce;

impl SetFinder for BruteForce {
    fn find(&self, cards: &[Card]) -> Option<Triple> {
        let n = cards.len();
        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    if is_valid_set(&cards[i], &cards[j], &cards[k]) {
                        return Some([cards[i], cards[j], cards[k]]);
                    }
                }
            }
        }
        None
    }
}

/// First set among `cards`, using the pair-lookup search.
#[must_use]
pub fn find_set(cards: &[Card]) -> Option<Triple> {
    PairLookup.find(cards)
}

/// First set among `cards`, using the brute-force scan.
#[must_use]
pub fn find_set_brute_force(cards: &[Card]) -> Option<Triple> {
    BruteForce.find(cards)
}

/// Every set among `cards`, each reported once, in witness order.
#[must_use]
pub fn all_sets(cards: &[Card]) -> Vec<Triple> {
    let index = index_cards(cards);
    let mut sets = Vec::new();
    for (i, first) in cards.iter().enumerate() {
        for (j, second) in cards.iter().enumerate().skip(i + 1) {
            if let Some(&k) = index.get(&first.complete(second)) {
                if k > j {
                    sets.push([*first, *second, cards[k]]);
                }
            }
        }
    }
    sets
}

/// Number of distinct sets among `cards`.
#[must_use]
pub fn count_sets(cards: &[Card]) -> usize {
    all_sets(cards).len()
}

fn index_cards(cards: &[Card]) -> FxHashMap<Card, usize> {
    cards.iter().enumerate().map(|(i, &card)| (card, i)).collect()
}
