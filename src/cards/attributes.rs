//! Card attributes.
//!
//! Every card carries four attributes (number, shape, color, fill), each
//! taking one of three values. Values are stored as neutral labels `A`, `B`,
//! `C`; the human-facing names only matter to renderers.
//!
//! ## Completing a set
//!
//! With values read as 0, 1, 2, three values form a valid attribute triple
//! exactly when their sum is divisible by 3 (all equal: `3v`; all distinct:
//! `0 + 1 + 2`). So the value completing any pair is `-(a + b) mod 3`.

use serde::{Deserialize, Serialize};

/// One of the three values an attribute can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Value {
    A,
    B,
    C,
}

impl Value {
    /// All values in canonical order.
    pub const ALL: [Value; 3] = [Value::A, Value::B, Value::C];

    /// Zero-based index (A = 0).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Value for a zero-based index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Value::A),
            1 => Some(Value::B),
            2 => Some(Value::C),
            _ => None,
        }
    }

    /// The value completing `self` and `other` into a valid triple.
    ///
    /// Equal inputs give the same value back; distinct inputs give the
    /// remaining one.
    #[must_use]
    pub const fn third(self, other: Value) -> Value {
        match (6 - self.index() - other.index()) % 3 {
            0 => Value::A,
            1 => Value::B,
            _ => Value::C,
        }
    }

    /// Whether three values are all equal or pairwise distinct.
    #[must_use]
    pub const fn forms_triple(a: Value, b: Value, c: Value) -> bool {
        (a.index() + b.index() + c.index()) % 3 == 0
    }
}

/// The four card attributes, in canonical (lexicographic) order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    Number,
    Shape,
    Color,
    Fill,
}

impl Attribute {
    /// All attributes in canonical order.
    pub const ALL: [Attribute; 4] = [Attribute::Number, Attribute::Shape, Attribute::Color, Attribute::Fill];

    /// Position of this attribute in a card's value array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Name used in signatures.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Number => "number",
            Attribute::Shape => "shape",
            Attribute::Color => "color",
            Attribute::Fill => "fill",
        }
    }

    /// Single-letter prefix used in asset codes.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Attribute::Number => 'n',
            Attribute::Shape => 's',
            Attribute::Color => 'c',
            Attribute::Fill => 'f',
        }
    }

    /// Human-facing label of a value for this attribute.
    #[must_use]
    pub const fn label(self, value: Value) -> &'static str {
        match (self, value) {
            (Attribute::Number, Value::A) => "1",
            (Attribute::Number, Value::B) => "2",
            (Attribute::Number, Value::C) => "3",
            (Attribute::Shape, Value::A) => "squiggle",
            (Attribute::Shape, Value::B) => "diamond",
            (Attribute::Shape, Value::C) => "oval",
            (Attribute::Color, Value::A) => "red",
            (Attribute::Color, Value::B) => "purple",
            (Attribute::Color, Value::C) => "green",
            (Attribute::Fill, Value::A) => "solid",
            (Attribute::Fill, Value::B) => "striped",
            (Attribute::Fill, Value::C) => "open",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
