//! Error types for the Enigmini library.

use thiserror::Error;

/// Broad failure class of an [`EnigminiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed machine configuration, rejected at construction time.
    Configuration,
    /// A queried position falls outside an established wiring domain.
    Lookup,
    /// An input character has no keymap entry.
    Symbol,
}

/// Errors produced by the Enigmini library.
#[derive(Error, Debug)]
pub enum EnigminiError {
    /// Wiring list is missing or empty.
    #[error("Mapping config not defined")]
    MissingWiring,

    /// Wiring does not list exactly one pair per position.
    #[error("Wiring must contain {expected} pairs, found {found}")]
    WiringLength { expected: usize, found: usize },

    /// A wiring position appears more than once on the same side.
    #[error("Wiring is not a bijection: position {0} appears more than once")]
    NotBijective(u8),

    /// Rotor threshold is zero.
    #[error("Threshold cannot be smaller than 1")]
    InvalidThreshold,

    /// Reflector maps a position onto itself.
    #[error("Reflector maps position {0} to itself")]
    ReflectorFixedPoint(u8),

    /// Reflector wiring is not its own inverse.
    #[error("Reflector is not an involution: {from} -> {to} but {to} -> {back}")]
    ReflectorNotInvolutive { from: u8, to: u8, back: u8 },

    /// A plugboard position is used by more than one pair.
    #[error("Plugboard position {0} is used more than once")]
    PlugboardConflict(u8),

    /// A plugboard pair connects a position to itself.
    #[error("Plugboard pair connects position {0} to itself")]
    PlugboardSelfPair(u8),

    /// Keymap does not have one entry per position.
    #[error("Keymap must contain {expected} entries, found {found}")]
    KeymapLength { expected: usize, found: usize },

    /// The same glyph is assigned to more than one keymap slot.
    #[error("Symbol {0:?} is assigned more than once in the keymap")]
    DuplicateSymbol(char),

    /// A machine was configured without rotors.
    #[error("Machine needs at least one rotor")]
    NoRotors,

    /// A rotor configuration gives both or neither of `wiring` and `shifts`.
    #[error("Rotor {0} must define exactly one of `wiring` or `shifts`")]
    AmbiguousRotor(usize),

    /// A combination input lists the same position twice.
    #[error("Position {0} is listed more than once in the combination input")]
    DuplicateCandidate(u8),

    /// A raw position value lies outside the machine's contacts.
    #[error("Position {0} is outside 1..=6")]
    PositionOutOfRange(i64),

    /// An input character has no keymap entry.
    #[error("Symbol {0:?} has no keymap entry")]
    UnknownSymbol(char),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EnigminiError {
    /// Returns the failure class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnigminiError::PositionOutOfRange(_) => ErrorKind::Lookup,
            EnigminiError::UnknownSymbol(_) => ErrorKind::Symbol,
            _ => ErrorKind::Configuration,
        }
    }
}

pub type Result<T> = std::result::Result<T, EnigminiError>;
