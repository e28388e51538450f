//! The supply of cards not yet on the table.
//!
//! Order carries no game meaning beyond "which card comes next"; draws take
//! from the end of the vector.

use tracing::error;

use super::card::{all_cards, Card, CARD_COUNT};
use crate::core::{EngineError, GameRng, Result};

/// Depletable, shuffle-able bag of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// An empty deck.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// All 81 cards, in canonical order (unshuffled).
    #[must_use]
    pub fn full() -> Self {
        let mut cards = Vec::with_capacity(CARD_COUNT);
        cards.extend(all_cards());
        Self { cards }
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Remaining cards; the last one is drawn next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Uniformly permute the remaining cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the next card.
    pub fn draw(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(EngineError::EmptyDeck)
    }

    /// Put a card back (undoing a deal).
    pub fn return_card(&mut self, card: Card) -> Result<()> {
        if self.contains(&card) {
            error!(%card, "card returned to a deck that already holds it");
            return Err(EngineError::DuplicateCard(card));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Drop every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_full_deck_is_distinct_cross_product() {
        let deck = Deck::full();
        assert_eq!(deck.len(), 81);

        let unique: FxHashSet<_> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), 81);

        for (i, card) in deck.cards().iter().enumerate() {
            assert_eq!(usize::from(card.index()), i);
        }
    }

    #[test]
    fn test_shuffle_preserves_membership() {
        let mut deck = Deck::full();
        let mut rng = GameRng::new(42);
        deck.shuffle(&mut rng);

        assert_ne!(deck, Deck::full());

        let mut sorted = deck.cards().to_vec();
        sorted.sort();
        assert_eq!(sorted, Deck::full().cards());
    }

    #[test]
    fn test_draw_until_empty() {
        let mut deck = Deck::full();
        for remaining in (0..81).rev() {
            assert!(deck.draw().is_ok());
            assert_eq!(deck.len(), remaining);
        }
        assert_eq!(deck.draw(), Err(EngineError::EmptyDeck));
    }

    #[test]
    fn test_return_card() {
        let mut deck = Deck::full();
        let card = deck.draw().unwrap();
        assert!(!deck.contains(&card));

        deck.return_card(card).unwrap();
        assert!(deck.contains(&card));
        assert_eq!(deck.len(), 81);
    }

    #[test]
    fn test_return_duplicate_rejected() {
        let mut deck = Deck::full();
        let card = deck.cards()[0];
        assert_eq!(deck.return_card(card), Err(EngineError::DuplicateCard(card)));
        assert_eq!(deck.len(), 81);
    }
}
