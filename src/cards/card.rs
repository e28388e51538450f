//! The SET card value object.

use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, Value};

/// Number of distinct cards: 3^4.
pub const CARD_COUNT: usize = 81;

/// A SET card: one value per attribute.
///
/// Immutable and `Copy`; equality is structural. Cards order
/// lexicographically by (number, shape, color, fill), which is also the
/// order of their base-3 index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    values: [Value; 4],
}

impl Card {
    /// Create a card from its four attribute values.
    #[must_use]
    pub const fn new(number: Value, shape: Value, color: Value, fill: Value) -> Self {
        Self {
            values: [number, shape, color, fill],
        }
    }

    /// Card for a canonical index in `0..81`.
    ///
    /// Digits are base 3, number being the most significant.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        if usize::from(index) >= CARD_COUNT {
            return None;
        }
        let mut rem = index;
        let mut values = [Value::A; 4];
        for slot in values.iter_mut().rev() {
            *slot = Value::from_index(rem % 3)?;
            rem /= 3;
        }
        Some(Self { values })
    }

    /// Canonical index in `0..81`.
    #[must_use]
    pub fn index(&self) -> u8 {
        self.values.iter().fold(0, |acc, v| acc * 3 + v.index())
    }

    /// Value of one attribute.
    #[must_use]
    pub const fn value(&self, attribute: Attribute) -> Value {
        self.values[attribute.index()]
    }

    /// All four values in canonical attribute order.
    #[must_use]
    pub const fn values(&self) -> [Value; 4] {
        self.values
    }

    #[must_use]
    pub const fn number(&self) -> Value {
        self.values[0]
    }

    #[must_use]
    pub const fn shape(&self) -> Value {
        self.values[1]
    }

    #[must_use]
    pub const fn color(&self) -> Value {
        self.values[2]
    }

    #[must_use]
    pub const fn fill(&self) -> Value {
        self.values[3]
    }

    /// The unique card that forms a valid set with `self` and `other`.
    ///
    /// For `self == other` this is the same card again, which can never be
    /// on the table twice.
    #[must_use]
    pub fn complete(&self, other: &Card) -> Card {
        let mut values = self.values;
        for (slot, theirs) in values.iter_mut().zip(other.values) {
            *slot = slot.third(theirs);
        }
        Card { values }
    }

    /// Opaque lookup key for renderers,
    /// e.g. `number=2,shape=diamond,color=red,fill=striped`.
    #[must_use]
    pub fn signature(&self) -> String {
        Attribute::ALL
            .iter()
            .map(|&attr| format!("{}={}", attr.name(), attr.label(self.value(attr))))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Compact asset code, e.g. `n2s2c1f2` (values counted from 1).
    #[must_use]
    pub fn asset_code(&self) -> String {
        let mut code = String::with_capacity(8);
        for attr in Attribute::ALL {
            code.push(attr.code());
            code.push(char::from(b'1' + self.value(attr).index()));
        }
        code
    }
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.asset_code())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.signature())
    }
}

/// Enumerate all 81 cards in canonical order.
pub fn all_cards() -> impl Iterator<Item = Card> {
    // from_index is total on 0..81
    (0..CARD_COUNT as u8).filter_map(Card::from_index)
}
