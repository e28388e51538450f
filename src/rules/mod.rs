//! Rules of SET.
//!
//! - `judge`: whether three cards form a set (the single source of truth)
//! - `search`: whether any set exists among the table cards, with a witness

pub mod judge;
pub mod search;

pub use judge::{attribute_is_valid, broken_attributes, is_valid_set};
pub use search::{all_sets, count_sets, find_set, find_set_brute_force, BruteForce, PairLookup, SetFinder, Triple};
