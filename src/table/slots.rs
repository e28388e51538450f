//! Fixed 12-slot table.
//!
//! Positions are stable identifiers laid out as 4 columns of 3 rows,
//! column-major: position 0 is column 0 row 0, position 3 is column 1 row 0.
//! Only the occupant of a position ever changes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::error;

use crate::cards::Card;
use crate::core::{EngineError, Result};

/// Number of positions on the table.
pub const TABLE_SLOTS: usize = 12;

/// Rows per column.
pub const TABLE_ROWS: usize = 3;

/// Columns on the table.
pub const TABLE_COLUMNS: usize = TABLE_SLOTS / TABLE_ROWS;

/// A table position identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(u8);

impl Position {
    /// Position for an index in `0..12`.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < TABLE_SLOTS {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Position at a column/row pair.
    #[must_use]
    pub const fn at(column: usize, row: usize) -> Option<Self> {
        if column < TABLE_COLUMNS && row < TABLE_ROWS {
            Some(Self((column * TABLE_ROWS + row) as u8))
        } else {
            None
        }
    }

    /// All positions in order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..TABLE_SLOTS as u8).map(Position)
    }

    /// Raw index in `0..12`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn column(self) -> usize {
        self.index() / TABLE_ROWS
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.index() % TABLE_ROWS
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Positions returned by table queries; never more than 12.
pub type PositionList = SmallVec<[Position; TABLE_SLOTS]>;

/// Mapping from the 12 positions to an optional card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    slots: [Option<Card>; TABLE_SLOTS],
}

impl Table {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Card at a position.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Card> {
        self.slots[position.index()]
    }

    /// Positions holding no card, in position order.
    #[must_use]
    pub fn empty_slots(&self) -> PositionList {
        Position::all().filter(|&p| self.get(p).is_none()).collect()
    }

    /// Put a card on an empty position.
    pub fn place(&mut self, position: Position, card: Card) -> Result<()> {
        let slot = &mut self.slots[position.index()];
        if slot.is_some() {
            error!(%position, %card, "card placed on an occupied table position");
            return Err(EngineError::SlotOccupied(position));
        }
        *slot = Some(card);
        Ok(())
    }

    /// Take the card off a position.
    pub fn remove(&mut self, position: Position) -> Option<Card> {
        self.slots[position.index()].take()
    }

    /// Cards on the table, in position order.
    #[must_use]
    pub fn occupied_cards(&self) -> Vec<Card> {
        self.slots.iter().flatten().copied().collect()
    }

    /// Occupied positions with their cards, in position order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Card)> + '_ {
        Position::all().filter_map(move |p| self.get(p).map(|card| (p, card)))
    }

    /// Where a card sits, if it is on the table.
    #[must_use]
    pub fn position_of(&self, card: &Card) -> Option<Position> {
        self.occupied().find(|(_, c)| c == card).map(|(p, _)| p)
    }

    /// Number of occupied positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Empty every position, returning the removed cards in position order.
    pub fn clear(&mut self) -> Vec<Card> {
        self.slots.iter_mut().filter_map(Option::take).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(i: u8) -> Card {
        Card::from_index(i).unwrap()
    }

    fn pos(i: u8) -> Position {
        Position::new(i).unwrap()
    }

    #[test]
    fn test_position_geometry() {
        assert!(Position::new(12).is_none());
        assert_eq!(pos(0).column(), 0);
        assert_eq!(pos(4).column(), 1);
        assert_eq!(pos(4).row(), 1);
        assert_eq!(pos(11).column(), 3);
        assert_eq!(pos(11).row(), 2);
        assert_eq!(Position::at(2, 1), Some(pos(7)));
        assert_eq!(Position::at(4, 0), None);
        assert_eq!(Position::all().count(), TABLE_SLOTS);
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = Table::new();
        assert!(table.is_empty());
        assert_eq!(table.empty_slots().len(), 12);
        assert!(table.occupied_cards().is_empty());
    }

    #[test]
    fn test_place_and_remove() {
        let mut table = Table::new();
        table.place(pos(3), card(10)).unwrap();

        assert_eq!(table.get(pos(3)), Some(card(10)));
        assert_eq!(table.len(), 1);
        assert_eq!(table.position_of(&card(10)), Some(pos(3)));
        assert!(!table.empty_slots().contains(&pos(3)));

        assert_eq!(table.remove(pos(3)), Some(card(10)));
        assert_eq!(table.remove(pos(3)), None);
        assert!(table.is_empty());
    }

    #[test]
    fn test_place_on_occupied_rejected() {
        let mut table = Table::new();
        table.place(pos(0), card(1)).unwrap();

        assert_eq!(table.place(pos(0), card(2)), Err(EngineError::SlotOccupied(pos(0))));
        assert_eq!(table.get(pos(0)), Some(card(1)));
    }

    #[test]
    fn test_clear_returns_cards() {
        let mut table = Table::new();
        for i in 0..12 {
            table.place(pos(i), card(i * 2)).unwrap();
        }
        assert!(table.is_full());

        let removed = table.clear();
        assert_eq!(removed.len(), 12);
        assert_eq!(removed[5], card(10));
        assert!(table.is_empty());
    }

    #[test]
    fn test_occupied_in_position_order() {
        let mut table = Table::new();
        table.place(pos(9), card(1)).unwrap();
        table.place(pos(2), card(2)).unwrap();

        let occupied: Vec<_> = table.occupied().collect();
        assert_eq!(occupied, vec![(pos(2), card(2)), (pos(9), card(1))]);
        assert_eq!(table.occupied_cards(), vec![card(2), card(1)]);
    }
}
