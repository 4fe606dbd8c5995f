//! Rotor: stateful permutation with a threshold-driven rotation schedule.
//!
//! A rotor counts every processed symbol. Each time the counter crosses a
//! multiple of `threshold`, the rotor turns by one slot. The rotation does
//! not change the key being looked up; it changes which stored wiring slot
//! answers the query.

use crate::error::{EnigminiError, Result};
use crate::position::{Direction, Position, POSITIONS};
use crate::wiring::Wiring;

/// Default number of steps per unit of rotation.
pub const DEFAULT_THRESHOLD: u64 = 1;

/// A rotating wheel in the machine's signal path.
///
/// Rotors are plain values: cloning one yields an independent wheel with
/// the same wiring and the same rotational state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Wiring,
    threshold: u64,
    counter: u64,
    offset: usize,
}

impl Rotor {
    /// Creates a rotor that turns on every step (threshold 1).
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmini::rotor::Rotor;
    /// use enigmini::wiring::Wiring;
    ///
    /// let wiring = Wiring::from_pairs(&[[1, 3], [2, 1], [3, 5], [4, 6], [5, 2], [6, 4]]).unwrap();
    /// let rotor = Rotor::new(wiring);
    /// assert_eq!(rotor.threshold(), 1);
    /// assert_eq!(rotor.counter(), 0);
    /// assert_eq!(rotor.offset(), 0);
    /// ```
    pub fn new(wiring: Wiring) -> Self {
        Rotor {
            wiring,
            threshold: DEFAULT_THRESHOLD,
            counter: 0,
            offset: 0,
        }
    }

    /// Creates a rotor that turns once every `threshold` steps.
    ///
    /// # Errors
    /// Returns [`EnigminiError::InvalidThreshold`] if `threshold < 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmini::rotor::Rotor;
    /// use enigmini::wiring::Wiring;
    ///
    /// let wiring = Wiring::from_shifts(&[2, -1, 2, 2, 3, -2]).unwrap();
    /// assert!(Rotor::with_threshold(wiring.clone(), 6).is_ok());
    /// assert!(Rotor::with_threshold(wiring, 0).is_err());
    /// ```
    pub fn with_threshold(wiring: Wiring, threshold: u64) -> Result<Self> {
        if threshold < 1 {
            return Err(EnigminiError::InvalidThreshold);
        }
        Ok(Rotor {
            threshold,
            ..Self::new(wiring)
        })
    }

    /// Offset-free lookup in the stored wiring.
    ///
    /// `Forward` returns the `to` paired with `from == position`; `Reverse`
    /// returns the `from` paired with `to == position`.
    pub fn lookup(&self, position: Position, direction: Direction) -> Position {
        match direction {
            Direction::Forward => self.wiring.forward(position),
            Direction::Reverse => self.wiring.reverse(position),
        }
    }

    /// Advances the counter by one and recomputes the offset.
    pub fn step(&mut self) {
        self.counter += 1;
        self.offset = ((self.counter / self.threshold) % POSITIONS as u64) as usize;
    }

    /// Forces the rotational offset without touching the counter.
    ///
    /// Any value is accepted and reduced modulo `POSITIONS`, so
    /// `set_offset(50)` leaves the rotor at offset 2. The next
    /// [`step`](Self::step) recomputes the offset from the counter.
    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset % POSITIONS;
    }

    /// Maps a slot index through the current offset:
    /// `((slot - offset) mod N + N) mod N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmini::rotor::Rotor;
    /// use enigmini::wiring::Wiring;
    ///
    /// let wiring = Wiring::from_shifts(&[2, -1, 2, 2, 3, -2]).unwrap();
    /// let mut rotor = Rotor::new(wiring);
    /// rotor.set_offset(50);
    /// assert_eq!(rotor.apply_offset(0), 4);
    /// ```
    pub fn apply_offset(&self, slot: usize) -> usize {
        let n = POSITIONS;
        (slot % n + n - self.offset % n) % n
    }

    /// Inverse of [`apply_offset`](Self::apply_offset): `(slot + offset) mod N`.
    fn remove_offset(&self, slot: usize) -> usize {
        (slot % POSITIONS + self.offset % POSITIONS) % POSITIONS
    }

    /// Passes `key` through the rotor at its current rotation.
    ///
    /// `Forward` takes the slot whose `from` is `key`, shifts that slot
    /// index by the offset and answers with the `to` of the shifted slot.
    /// `Reverse` undoes exactly that mapping, so at any fixed offset
    /// `get_value(get_value(k, Forward), Reverse) == k`.
    pub fn get_value(&self, key: Position, direction: Direction) -> Position {
        match direction {
            Direction::Forward => {
                let slot = self.apply_offset(self.wiring.slot_of_from(key));
                self.wiring.slot(slot).to
            }
            Direction::Reverse => {
                let slot = self.remove_offset(self.wiring.slot_of_to(key));
                self.wiring.slot(slot).from
            }
        }
    }

    /// Returns the rotor to its initial state (counter 0, offset 0).
    pub fn reset(&mut self) {
        self.counter = 0;
        self.offset = 0;
    }

    /// Stored wiring, unaffected by rotation.
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// Steps per unit of rotation.
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Total number of steps taken since construction or the last reset.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Current rotational offset, always below `POSITIONS`.
    pub fn offset(&self) -> usize {
        self.offset
    }
}
