//! Shared fixtures for integration tests.

#![allow(dead_code)]

use set_engine::{Card, Deck};

/// Canonical indices of 20 cards with no set among any three of them
/// (a maximum cap in the 4-attribute game).
pub const CAP_20: [u8; 20] = [
    1, 2, 4, 8, 16, 18, 20, 25, 26, 28, 44, 56, 64, 68, 70, 71, 73, 74, 78, 79,
];

/// Nine cards from `CAP_20` plus one set (13, 45, 62) that is the only set
/// among the twelve.
pub const ONE_SET_TWELVE: [u8; 12] = [1, 18, 26, 56, 64, 68, 71, 73, 78, 13, 45, 62];

/// The lone set inside `ONE_SET_TWELVE`.
pub const LONE_SET: [u8; 3] = [13, 45, 62];

pub fn card(index: u8) -> Card {
    Card::from_index(index).expect("index below 81")
}

pub fn cards(indices: &[u8]) -> Vec<Card> {
    indices.iter().map(|&i| card(i)).collect()
}

/// Build a deck holding exactly these cards.
pub fn deck_of(indices: &[u8]) -> Deck {
    let mut deck = Deck::empty();
    for card in cards(indices) {
        deck.return_card(card).expect("fixture cards are distinct");
    }
    deck
}
