//! Plugboard: optional involutive partial permutation.
//!
//! Listed pairs are swapped; every other position is left unchanged.

use std::fmt;

use crate::error::{EnigminiError, Result};
use crate::position::{Position, POSITIONS};

/// Set of disjoint swapped position pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    map: [Position; POSITIONS],
    pairs: Vec<(Position, Position)>,
}

impl Default for Plugboard {
    fn default() -> Self {
        Plugboard {
            map: std::array::from_fn(Position::from_index),
            pairs: Vec::new(),
        }
    }
}

impl Plugboard {
    /// Builds a plugboard from typed pairs.
    ///
    /// # Errors
    /// - [`EnigminiError::PlugboardSelfPair`] if a pair joins a position to itself.
    /// - [`EnigminiError::PlugboardConflict`] if a position is used by two pairs.
    pub fn new(pairs: &[(Position, Position)]) -> Result<Self> {
        let mut board = Plugboard::default();
        let mut used = [false; POSITIONS];
        for &(a, b) in pairs {
            if a == b {
                return Err(EnigminiError::PlugboardSelfPair(a.get()));
            }
            for p in [a, b] {
                if used[p.index()] {
                    return Err(EnigminiError::PlugboardConflict(p.get()));
                }
                used[p.index()] = true;
            }
            board.map[a.index()] = b;
            board.map[b.index()] = a;
            board.pairs.push((a, b));
        }
        Ok(board)
    }

    /// Builds a plugboard from raw `[a, b]` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmini::plugboard::Plugboard;
    /// use enigmini::position::Position;
    ///
    /// let board = Plugboard::from_pairs(&[[1, 4]]).unwrap();
    /// let p = |v| Position::new(v).unwrap();
    /// assert_eq!(board.swap(p(1)), p(4));
    /// assert_eq!(board.swap(p(4)), p(1));
    /// assert_eq!(board.swap(p(2)), p(2));
    /// ```
    pub fn from_pairs(pairs: &[[u8; 2]]) -> Result<Self> {
        let typed = pairs
            .iter()
            .map(|&[a, b]| Ok((Position::new(a)?, Position::new(b)?)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(&typed)
    }

    /// Partner of `position`, or `position` itself when unplugged.
    pub fn swap(&self, position: Position) -> Position {
        self.map[position.index()]
    }

    /// The swapped pairs, in the order they were given.
    pub fn pairs(&self) -> &[(Position, Position)] {
        &self.pairs
    }

    /// `true` when no pair is plugged.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pairs.is_empty() {
            return write!(f, "none");
        }
        for (i, (a, b)) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}-{}", a, b)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(v: u8) -> Position {
        Position::new(v).unwrap()
    }

    #[test]
    fn test_default_is_identity() {
        let board = Plugboard::default();
        assert!(board.is_empty());
        for pos in Position::all() {
            assert_eq!(board.swap(pos), pos);
        }
    }

    #[test]
    fn test_swap_is_involution() {
        let board = Plugboard::from_pairs(&[[1, 2], [3, 6]]).unwrap();
        for pos in Position::all() {
            assert_eq!(board.swap(board.swap(pos)), pos);
        }
        assert_eq!(board.swap(p(6)), p(3));
        assert_eq!(board.swap(p(5)), p(5));
    }

    #[test]
    fn test_conflict_rejected() {
        assert!(matches!(
            Plugboard::from_pairs(&[[1, 2], [2, 3]]),
            Err(EnigminiError::PlugboardConflict(2))
        ));
    }

    #[test]
    fn test_self_pair_rejected() {
        assert!(matches!(
            Plugboard::from_pairs(&[[4, 4]]),
            Err(EnigminiError::PlugboardSelfPair(4))
        ));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(
            Plugboard::from_pairs(&[[1, 9]]),
            Err(EnigminiError::PositionOutOfRange(9))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Plugboard::default().to_string(), "none");
        let board = Plugboard::from_pairs(&[[1, 2], [3, 6]]).unwrap();
        assert_eq!(board.to_string(), "1-2 3-6");
    }
}
