//! Validated wiring tables shared by rotors and the reflector.
//!
//! A [`Wiring`] is an ordered list of `(from, to)` slots forming a full
//! bijection over the machine's positions. The slot order is significant:
//! rotor offsets rotate which slot answers a query.

use crate::error::{EnigminiError, Result};
use crate::position::{Position, POSITIONS};

/// One stored `(from, to)` pair of a wiring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub from: Position,
    pub to: Position,
}

/// Ordered bijection over all positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring {
    slots: [Slot; POSITIONS],
    // slot index holding each `from` / `to` position, indexed by position
    from_slot: [usize; POSITIONS],
    to_slot: [usize; POSITIONS],
}

impl Wiring {
    /// Builds a wiring from raw `[from, to]` pairs, keeping their order.
    ///
    /// # Errors
    /// - [`EnigminiError::MissingWiring`] if `pairs` is empty.
    /// - [`EnigminiError::WiringLength`] if there is not one pair per position.
    /// - [`EnigminiError::PositionOutOfRange`] for a value outside `1..=POSITIONS`.
    /// - [`EnigminiError::NotBijective`] if a position repeats on either side.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmini::wiring::Wiring;
    ///
    /// let wiring = Wiring::from_pairs(&[[1, 3], [2, 1], [3, 5], [4, 6], [5, 2], [6, 4]]).unwrap();
    /// assert_eq!(wiring.slot(0).to.get(), 3);
    ///
    /// assert!(Wiring::from_pairs(&[]).is_err());
    /// ```
    pub fn from_pairs(pairs: &[[u8; 2]]) -> Result<Self> {
        if pairs.is_empty() {
            return Err(EnigminiError::MissingWiring);
        }
        if pairs.len() != POSITIONS {
            return Err(EnigminiError::WiringLength {
                expected: POSITIONS,
                found: pairs.len(),
            });
        }

        let mut slots = [Slot {
            from: Position::from_index(0),
            to: Position::from_index(0),
        }; POSITIONS];
        let mut from_slot = [usize::MAX; POSITIONS];
        let mut to_slot = [usize::MAX; POSITIONS];

        for (i, &[from, to]) in pairs.iter().enumerate() {
            let from = Position::new(from)?;
            let to = Position::new(to)?;
            if from_slot[from.index()] != usize::MAX {
                return Err(EnigminiError::NotBijective(from.get()));
            }
            if to_slot[to.index()] != usize::MAX {
                return Err(EnigminiError::NotBijective(to.get()));
            }
            from_slot[from.index()] = i;
            to_slot[to.index()] = i;
            slots[i] = Slot { from, to };
        }

        Ok(Wiring {
            slots,
            from_slot,
            to_slot,
        })
    }

    /// Builds a wiring from per-position displacements.
    ///
    /// Slot `i` wires position `i + 1` to that position moved by
    /// `shifts[i]`, wrapping around the contacts in either direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmini::wiring::Wiring;
    ///
    /// let shifted = Wiring::from_shifts(&[2, -1, 2, 2, 3, -2]).unwrap();
    /// let paired = Wiring::from_pairs(&[[1, 3], [2, 1], [3, 5], [4, 6], [5, 2], [6, 4]]).unwrap();
    /// assert_eq!(shifted, paired);
    /// ```
    pub fn from_shifts(shifts: &[i32]) -> Result<Self> {
        if shifts.is_empty() {
            return Err(EnigminiError::MissingWiring);
        }
        if shifts.len() != POSITIONS {
            return Err(EnigminiError::WiringLength {
                expected: POSITIONS,
                found: shifts.len(),
            });
        }
        let n = POSITIONS as i64;
        let pairs: Vec<[u8; 2]> = shifts
            .iter()
            .enumerate()
            .map(|(i, &shift)| {
                let to = (i as i64 + shift as i64).rem_euclid(n) + 1;
                [i as u8 + 1, to as u8]
            })
            .collect();
        Self::from_pairs(&pairs)
    }

    /// Returns the slot stored at `index`.
    ///
    /// # Panics
    /// Panics if `index >= POSITIONS`.
    pub fn slot(&self, index: usize) -> Slot {
        self.slots[index]
    }

    /// Returns all slots in stored order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Index of the slot whose `from` is `position`.
    pub fn slot_of_from(&self, position: Position) -> usize {
        self.from_slot[position.index()]
    }

    /// Index of the slot whose `to` is `position`.
    pub fn slot_of_to(&self, position: Position) -> usize {
        self.to_slot[position.index()]
    }

    /// Returns the `to` paired with `from == position`.
    pub fn forward(&self, position: Position) -> Position {
        self.slots[self.slot_of_from(position)].to
    }

    /// Returns the `from` paired with `to == position`.
    pub fn reverse(&self, position: Position) -> Position {
        self.slots[self.slot_of_to(position)].from
    }
}
