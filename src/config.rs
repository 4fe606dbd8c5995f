//! JSON machine configuration.
//!
//! A [`MachineConfig`] is the blueprint of a machine: every call to
//! [`MachineConfig::build`] assembles a new [`Enigmini`] with rotors at
//! their configured starting state.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EnigminiError, Result};
use crate::keymap::{KeyEntry, Keymap};
use crate::machine::Enigmini;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::{Rotor, DEFAULT_THRESHOLD};
use crate::wiring::Wiring;

/// Complete machine description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// One entry per position, in position order.
    pub keymap: Vec<KeyEntry>,
    /// Rotors in signal order (keyboard side first).
    pub rotors: Vec<RotorConfig>,
    /// Reflector `[from, to]` pairs.
    pub reflector: Vec<[u8; 2]>,
    /// Plugboard `[a, b]` pairs (empty when omitted).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugboard: Vec<[u8; 2]>,
}

/// Wiring and schedule of one rotor.
///
/// Exactly one of `wiring` and `shifts` must be given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorConfig {
    /// Explicit `[from, to]` pairs, in slot order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wiring: Option<Vec<[u8; 2]>>,
    /// Per-position displacement (see [`Wiring::from_shifts`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shifts: Option<Vec<i32>>,
    /// Steps per unit of rotation (default: 1).
    #[serde(default = "default_threshold")]
    pub threshold: u64,
    /// Starting offset (default: 0).
    #[serde(default)]
    pub offset: usize,
}

fn default_threshold() -> u64 {
    DEFAULT_THRESHOLD
}

impl RotorConfig {
    /// Builds a fresh rotor at its configured starting offset.
    ///
    /// `index` is only used to identify the rotor in errors.
    pub fn build(&self, index: usize) -> Result<Rotor> {
        let wiring = match (&self.wiring, &self.shifts) {
            (Some(pairs), None) => Wiring::from_pairs(pairs)?,
            (None, Some(shifts)) => Wiring::from_shifts(shifts)?,
            _ => return Err(EnigminiError::AmbiguousRotor(index)),
        };
        let mut rotor = Rotor::with_threshold(wiring, self.threshold)?;
        if self.offset != 0 {
            rotor.set_offset(self.offset);
        }
        Ok(rotor)
    }
}

impl MachineConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the keymap entries.
    pub fn keymap(&self) -> Result<Keymap> {
        Keymap::new(&self.keymap)
    }

    /// Builds every rotor afresh, in signal order.
    pub fn build_rotors(&self) -> Result<Vec<Rotor>> {
        self.rotors
            .iter()
            .enumerate()
            .map(|(i, r)| r.build(i))
            .collect()
    }

    /// Validates the reflector pairs.
    pub fn reflector(&self) -> Result<Reflector> {
        Reflector::from_pairs(&self.reflector)
    }

    /// Validates the plugboard pairs; identity when none are given.
    pub fn plugboard(&self) -> Result<Plugboard> {
        Plugboard::from_pairs(&self.plugboard)
    }

    /// Assembles a new machine with freshly constructed rotors.
    pub fn build(&self) -> Result<Enigmini> {
        Enigmini::new(
            self.keymap()?,
            self.build_rotors()?,
            self.reflector()?,
            Some(self.plugboard()?),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const SAMPLE: &str = r#"{
        "keymap": ["O", "N", ["1", "!"], "C", "S", "X"],
        "rotors": [
            { "shifts": [1, 3, 1, 2, 2, 3] },
            { "wiring": [[1,3],[2,1],[3,5],[4,6],[5,2],[6,4]], "threshold": 6, "offset": 2 }
        ],
        "reflector": [[1,5],[2,4],[3,6],[4,2],[5,1],[6,3]],
        "plugboard": [[1, 2]]
    }"#;

    #[test]
    fn test_parse_sample() {
        let config = MachineConfig::from_json_str(SAMPLE).unwrap();
        assert_eq!(config.keymap.len(), 6);
        assert_eq!(config.keymap[2], KeyEntry::Pair(['1', '!']));
        assert_eq!(config.rotors.len(), 2);
        assert_eq!(config.rotors[0].threshold, 1);
        assert_eq!(config.rotors[0].offset, 0);
        assert_eq!(config.rotors[1].threshold, 6);
        assert_eq!(config.plugboard, vec![[1, 2]]);
    }

    #[test]
    fn test_build_sample() {
        let machine = MachineConfig::from_json_str(SAMPLE).unwrap().build().unwrap();
        assert_eq!(machine.rotors().len(), 2);
        assert_eq!(machine.rotors()[1].offset(), 2);
        assert_eq!(machine.rotors()[1].counter(), 0);
        assert_eq!(machine.plugboard().to_string(), "1-2");
    }

    #[test]
    fn test_huge_offset_roundtrip() {
        let json = SAMPLE.replace(r#""offset": 2"#, &format!(r#""offset": {}"#, usize::MAX));
        let config = MachineConfig::from_json_str(&json).unwrap();
        assert_eq!(config.rotors[1].offset, usize::MAX);

        let plain = "SONIC1XCONS";
        let cipher = config.build().unwrap().encrypt(plain).unwrap();
        assert_eq!(config.build().unwrap().decrypt(&cipher).unwrap(), plain);
    }

    #[test]
    fn test_plugboard_optional() {
        let json = r#"{
            "keymap": ["A", "B", "C", "D", "E", "F"],
            "rotors": [{ "shifts": [0, 0, 0, 0, 0, 0] }],
            "reflector": [[1,2],[2,1],[3,4],[4,3],[5,6],[6,5]]
        }"#;
        let machine = MachineConfig::from_json_str(json).unwrap().build().unwrap();
        assert!(machine.plugboard().is_empty());
    }

    #[test]
    fn test_builds_are_independent() {
        let config = MachineConfig::from_json_str(SAMPLE).unwrap();
        let mut first = config.build().unwrap();
        first.process("ONC").unwrap();
        let second = config.build().unwrap();
        assert_eq!(second.rotors()[0].counter(), 0);
        assert_eq!(first.rotors()[0].counter(), 3);
    }

    #[test]
    fn test_rotor_needs_exactly_one_wiring() {
        let both = RotorConfig {
            wiring: Some(vec![[1, 2]]),
            shifts: Some(vec![0; 6]),
            threshold: 1,
            offset: 0,
        };
        assert!(matches!(both.build(3), Err(EnigminiError::AmbiguousRotor(3))));

        let neither = RotorConfig {
            wiring: None,
            shifts: None,
            threshold: 1,
            offset: 0,
        };
        assert!(matches!(neither.build(0), Err(EnigminiError::AmbiguousRotor(0))));
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let json = SAMPLE.replace(r#""threshold": 6"#, r#""threshold": 0"#);
        let config = MachineConfig::from_json_str(&json).unwrap();
        assert!(matches!(config.build(), Err(EnigminiError::InvalidThreshold)));
    }

    #[test]
    fn test_empty_rotor_list_rejected() {
        let mut config = MachineConfig::from_json_str(SAMPLE).unwrap();
        config.rotors.clear();
        assert!(matches!(config.build(), Err(EnigminiError::NoRotors)));
    }

    #[test]
    fn test_malformed_json_is_configuration_error() {
        let err = MachineConfig::from_json_str("{ \"keymap\": 5 }").unwrap_err();
        assert!(matches!(err, EnigminiError::Json(_)));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_missing_file() {
        let err = MachineConfig::from_file("/nonexistent/enigmini.json").unwrap_err();
        assert!(matches!(err, EnigminiError::Io(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = MachineConfig::from_json_str(SAMPLE).unwrap();
        let json = config.to_json_string().unwrap();
        assert_eq!(MachineConfig::from_json_str(&json).unwrap(), config);
    }
}
