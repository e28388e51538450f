//! Set validity.
//!
//! Three cards form a set when, for every attribute independently, the
//! three values are all equal or all different. A value appearing exactly
//! twice breaks the set.

use crate::cards::{Attribute, Card, Value};

/// Whether one attribute is valid across three cards.
#[must_use]
pub fn attribute_is_valid(attribute: Attribute, a: &Card, b: &Card, c: &Card) -> bool {
    Value::forms_triple(a.value(attribute), b.value(attribute), c.value(attribute))
}

/// Whether three cards form a valid set.
///
/// Pure and symmetric in its arguments.
#[must_use]
pub fn is_valid_set(a: &Card, b: &Card, c: &Card) -> bool {
    Attribute::ALL
        .iter()
        .all(|&attr| attribute_is_valid(attr, a, b, c))
}

/// Attributes that break the set, in canonical order. Empty for a valid set.
#[must_use]
pub fn broken_attributes(a: &Card, b: &Card, c: &Card) -> Vec<Attribute> {
    Attribute::ALL
        .into_iter()
        .filter(|&attr| !attribute_is_valid(attr, a, b, c))
        .collect()
}
