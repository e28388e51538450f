//! The face-up table.
//!
//! ## Key Types
//!
//! - `Position`: stable slot identifier (4 columns × 3 rows)
//! - `Table`: fixed 12-slot mapping of positions to optional cards

pub mod slots;

pub use slots::{Position, PositionList, Table, TABLE_COLUMNS, TABLE_ROWS, TABLE_SLOTS};
