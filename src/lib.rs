//! Enigmini rotor cipher machine.
//!
//! Enigmini is a miniature Enigma-style cipher: a stack of rotating wheels,
//! a fixed reflector and an optional plugboard, operating on six contact
//! positions. Each printable symbol is bound to one position through a
//! keymap, optionally as the shifted variant of that position's key.
//!
//! The crate also recovers plaintext when the plugboard is unknown, by
//! decrypting once under every possible plugboard wiring.
//!
//! # Architecture
//!
//! ```text
//! Keymap      (symbol ↔ position, base/shifted variant)
//!     ↕
//! Plugboard   (optional swapped pairs)
//!     ↕
//! Rotor[0..k] (stateful permutations, step once per symbol)
//!     ↕
//! Reflector   (fixed-point-free involution)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with two identically configured machines:
//!
//! ```
//! use enigmini::config::MachineConfig;
//!
//! let config = MachineConfig::from_json_str(r#"{
//!     "keymap": [["A", "a"], ["B", "b"], ["C", "c"], ["D", "d"], ["E", "e"], ["F", "f"]],
//!     "rotors": [
//!         { "shifts": [1, 3, 1, 2, 2, 3] },
//!         { "shifts": [2, -1, 2, 2, 3, -2], "threshold": 6 }
//!     ],
//!     "reflector": [[1,5],[2,4],[3,6],[4,2],[5,1],[6,3]],
//!     "plugboard": [[1, 6]]
//! }"#).unwrap();
//!
//! let mut encoder = config.build().unwrap();
//! let mut decoder = config.build().unwrap();
//!
//! let cipher = encoder.encrypt("Decade").unwrap();
//! assert_eq!(decoder.decrypt(&cipher).unwrap(), "Decade");
//! ```
//!
//! Recover the plaintext without knowing the plugboard:
//!
//! ```
//! use enigmini::config::MachineConfig;
//! use enigmini::search::PlugboardSearch;
//!
//! let mut config = MachineConfig::from_json_str(r#"{
//!     "keymap": ["A", "B", "C", "D", "E", "F"],
//!     "rotors": [{ "shifts": [1, 3, 1, 2, 2, 3] }],
//!     "reflector": [[1,5],[2,4],[3,6],[4,2],[5,1],[6,3]],
//!     "plugboard": [[3, 4]]
//! }"#).unwrap();
//! let cipher = config.build().unwrap().encrypt("FADED").unwrap();
//!
//! config.plugboard.clear();
//! let search = PlugboardSearch::over_all_positions(config.build().unwrap());
//! let records = search.run_parallel(&cipher);
//! assert!(records.iter().any(|r| r.label == "3-4" && r.plaintext() == Some("FADED")));
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod keymap;
pub mod machine;
pub mod plugboard;
pub mod position;
pub mod reflector;
pub mod rotor;
pub mod search;
pub mod wiring;

pub use config::MachineConfig;
pub use error::{EnigminiError, ErrorKind, Result};
pub use keymap::{KeyEntry, Keymap, Variant};
pub use machine::Enigmini;
pub use plugboard::Plugboard;
pub use position::{Direction, Position, POSITIONS};
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use wiring::Wiring;
