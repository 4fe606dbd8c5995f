//! Enigmini: the cipher engine driving one symbol at a time through the
//! signal path.
//!
//! ```text
//! symbol → Keymap → Plugboard → Rotor[0..k] (forward) → Reflector
//!        → Rotor[k..0] (reverse) → Plugboard → Keymap → symbol
//! ```
//!
//! Every rotor steps once after each produced symbol. Because the plugboard
//! and reflector are involutions and each rotor's reverse pass inverts its
//! forward pass at the current offset, the whole path is its own inverse:
//! the same operation both encrypts and decrypts.

use tracing::{debug, trace};

use crate::error::{EnigminiError, Result};
use crate::keymap::Keymap;
use crate::plugboard::Plugboard;
use crate::position::{Direction, Position};
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Rotor cipher machine.
///
/// The machine owns its rotors and mutates their rotation state while
/// processing text. Two machines agree symbol-for-symbol only while their
/// rotors start from the same state; clone a machine (or call
/// [`reset`](Self::reset)) to start an independent session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enigmini {
    keymap: Keymap,
    rotors: Vec<Rotor>,
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Enigmini {
    /// Assembles a machine.
    ///
    /// `rotors` are traversed in order on the way to the reflector and in
    /// reverse order on the way back. A missing plugboard behaves as an
    /// empty one.
    ///
    /// # Errors
    /// Returns [`EnigminiError::NoRotors`] if `rotors` is empty.
    pub fn new(
        keymap: Keymap,
        rotors: Vec<Rotor>,
        reflector: Reflector,
        plugboard: Option<Plugboard>,
    ) -> Result<Self> {
        if rotors.is_empty() {
            return Err(EnigminiError::NoRotors);
        }
        let plugboard = plugboard.unwrap_or_default();
        debug!(
            rotors = rotors.len(),
            plugboard = %plugboard,
            "assembled machine"
        );
        Ok(Enigmini {
            keymap,
            rotors,
            reflector,
            plugboard,
        })
    }

    /// Returns a copy of this machine with a different plugboard and the
    /// same rotor state.
    pub fn with_plugboard(&self, plugboard: Plugboard) -> Self {
        Enigmini {
            plugboard,
            ..self.clone()
        }
    }

    /// Runs one symbol through the machine and advances every rotor.
    ///
    /// # Errors
    /// Returns [`EnigminiError::UnknownSymbol`] if `symbol` has no keymap
    /// entry. The rotors do not move in that case.
    pub fn process_symbol(&mut self, symbol: char) -> Result<char> {
        let (entry, variant) = self.keymap.locate(symbol)?;
        let exit = self.signal_path(entry);
        let output = self.keymap.glyph(exit, variant);
        trace!(%symbol, %entry, %exit, %output, "processed symbol");

        for rotor in self.rotors.iter_mut() {
            rotor.step();
        }
        Ok(output)
    }

    /// Position-level path from keyboard contact to lamp contact.
    fn signal_path(&self, entry: Position) -> Position {
        let mut p = self.plugboard.swap(entry);
        for rotor in &self.rotors {
            p = rotor.get_value(p, Direction::Forward);
        }
        p = self.reflector.reflect(p);
        for rotor in self.rotors.iter().rev() {
            p = rotor.get_value(p, Direction::Reverse);
        }
        self.plugboard.swap(p)
    }

    /// Processes `text` symbol by symbol, in order.
    ///
    /// Stops at the first symbol without a keymap entry; rotors keep the
    /// steps taken for the symbols before it.
    ///
    /// A shifted symbol keeps its variant on the way out. When the output
    /// position has no shifted glyph, its base glyph is emitted instead and
    /// the variant is lost: decrypting that output gives back the base
    /// glyph of the input position, not the shifted one. Text round-trips
    /// exactly when it uses only base glyphs, or when every keymap entry
    /// carries both.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmini::config::MachineConfig;
    ///
    /// let config = MachineConfig::from_json_str(r#"{
    ///     "keymap": ["A", "B", "C", "D", "E", "F"],
    ///     "rotors": [{ "wiring": [[1,3],[2,1],[3,5],[4,6],[5,2],[6,4]] }],
    ///     "reflector": [[1,5],[2,4],[3,6],[4,2],[5,1],[6,3]]
    /// }"#).unwrap();
    ///
    /// let mut encoder = config.build().unwrap();
    /// let mut decoder = config.build().unwrap();
    ///
    /// let cipher = encoder.process("FACADE").unwrap();
    /// assert_eq!(decoder.process(&cipher).unwrap(), "FACADE");
    /// ```
    pub fn process(&mut self, text: &str) -> Result<String> {
        text.chars().map(|c| self.process_symbol(c)).collect()
    }

    /// Encrypts `plain`. Identical to [`process`](Self::process).
    pub fn encrypt(&mut self, plain: &str) -> Result<String> {
        self.process(plain)
    }

    /// Decrypts `cipher`. Identical to [`process`](Self::process).
    pub fn decrypt(&mut self, cipher: &str) -> Result<String> {
        self.process(cipher)
    }

    /// Returns every rotor to counter 0, offset 0.
    pub fn reset(&mut self) {
        for rotor in self.rotors.iter_mut() {
            rotor.reset();
        }
    }

    /// Symbol table on both ends of the signal path.
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Rotors in signal order.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Mutable access to the rotors, e.g. to set starting offsets.
    pub fn rotors_mut(&mut self) -> &mut [Rotor] {
        &mut self.rotors
    }

    /// Reflector at the turning point of the path.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Plugboard in use; identity when none was given.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }
}
