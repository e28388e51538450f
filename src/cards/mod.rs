//! Cards and the deck.
//!
//! ## Key Types
//!
//! - `Value`, `Attribute`: the 3-valued attributes a card is made of
//! - `Card`: immutable 4-attribute value object
//! - `Deck`: the supply of cards not on the table

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{Attribute, Value};
pub use card::{all_cards, Card, CARD_COUNT};
pub use deck::Deck;
