//! Brute-force recovery of an unknown plugboard.
//!
//! [`combinations`] enumerates every candidate plugboard over a set of
//! positions, [`driver`] decrypts a ciphertext once per candidate, and
//! [`report`] compares a result against a known reference text.

pub mod combinations;
pub mod driver;
pub mod report;

pub use combinations::{matching_count, Matching, Matchings, PlugboardCombinations};
pub use driver::{Outcome, PlugboardSearch, SearchRecord};
pub use report::{mark_diffs, DiffReport};
