//! Reflector: fixed, fixed-point-free involution at the end of the rotor stack.

use crate::error::{EnigminiError, Result};
use crate::position::Position;
use crate::wiring::Wiring;

/// Stateless turnaround wheel. Every position is paired with a different
/// position, and the pairing is symmetric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: Wiring,
}

impl Reflector {
    /// Validates `wiring` as a fixed-point-free involution.
    ///
    /// # Errors
    /// - [`EnigminiError::ReflectorFixedPoint`] if a position maps to itself.
    /// - [`EnigminiError::ReflectorNotInvolutive`] if `r(r(p)) != p` for some `p`.
    pub fn new(wiring: Wiring) -> Result<Self> {
        for p in Position::all() {
            let to = wiring.forward(p);
            if to == p {
                return Err(EnigminiError::ReflectorFixedPoint(p.get()));
            }
            let back = wiring.forward(to);
            if back != p {
                return Err(EnigminiError::ReflectorNotInvolutive {
                    from: p.get(),
                    to: to.get(),
                    back: back.get(),
                });
            }
        }
        Ok(Reflector { wiring })
    }

    /// Builds a reflector from raw `[from, to]` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmini::reflector::Reflector;
    /// use enigmini::position::Position;
    ///
    /// let r = Reflector::from_pairs(&[[1, 5], [2, 4], [3, 6], [4, 2], [5, 1], [6, 3]]).unwrap();
    /// assert_eq!(r.reflect(Position::new(1).unwrap()).get(), 5);
    /// ```
    pub fn from_pairs(pairs: &[[u8; 2]]) -> Result<Self> {
        Self::new(Wiring::from_pairs(pairs)?)
    }

    /// Maps a position to its partner.
    pub fn reflect(&self, position: Position) -> Position {
        self.wiring.forward(position)
    }

    /// Underlying pairs.
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }
}
