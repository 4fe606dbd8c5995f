//! Contact positions and signal direction.
//!
//! Every component of the machine (keymap, rotors, reflector, plugboard)
//! works on the same fixed set of contacts, numbered `1..=POSITIONS`.

use std::fmt;

use serde::Serialize;

use crate::error::{EnigminiError, Result};

/// Number of contacts in the machine.
pub const POSITIONS: usize = 6;

/// One of the machine's contacts, guaranteed to lie in `1..=POSITIONS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Position(u8);

impl Position {
    /// Creates a position from its 1-based contact number.
    ///
    /// # Errors
    /// Returns [`EnigminiError::PositionOutOfRange`] if `value` is not in
    /// `1..=POSITIONS`.
    pub fn new(value: u8) -> Result<Self> {
        if value == 0 || value as usize > POSITIONS {
            return Err(EnigminiError::PositionOutOfRange(value as i64));
        }
        Ok(Position(value))
    }

    /// Creates a position from a 0-based slot index.
    ///
    /// # Panics
    /// Panics if `index >= POSITIONS`.
    pub(crate) fn from_index(index: usize) -> Self {
        assert!(index < POSITIONS, "position index {} out of range", index);
        Position(index as u8 + 1)
    }

    /// Returns the 1-based contact number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the 0-based slot index (`get() - 1`).
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterates over every position in ascending order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..POSITIONS).map(Position::from_index)
    }
}

impl TryFrom<u8> for Position {
    type Error = EnigminiError;

    fn try_from(value: u8) -> Result<Self> {
        Position::new(value)
    }
}

impl From<Position> for u8 {
    fn from(p: Position) -> u8 {
        p.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction in which a signal traverses a rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Keyboard towards reflector (`from` → `to`).
    #[default]
    Forward,
    /// Reflector back towards keyboard (`to` → `from`).
    Reverse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_positions() {
        for v in 1..=POSITIONS as u8 {
            let p = Position::new(v).unwrap();
            assert_eq!(p.get(), v);
            assert_eq!(p.index(), v as usize - 1);
        }
    }

    #[test]
    fn test_out_of_range_positions() {
        assert!(matches!(
            Position::new(0),
            Err(EnigminiError::PositionOutOfRange(0))
        ));
        assert!(matches!(
            Position::new(7),
            Err(EnigminiError::PositionOutOfRange(7))
        ));
    }

    #[test]
    fn test_all_positions_in_order() {
        let all: Vec<u8> = Position::all().map(Position::get).collect();
        assert_eq!(all, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_try_from_and_into() {
        let p = Position::try_from(4).unwrap();
        let raw: u8 = p.into();
        assert_eq!(raw, 4);
        assert!(Position::try_from(42).is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        let p = Position::new(3).unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "3");
    }

    #[test]
    fn test_default_direction_is_forward() {
        assert_eq!(Direction::default(), Direction::Forward);
    }
}
