//! Brute-force driver: decrypts a ciphertext under every candidate plugboard.
//!
//! Each candidate runs on its own copy of an untouched prototype machine,
//! so rotor state never leaks from one candidate into the next. A candidate
//! that fails is recorded and the sweep continues.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::machine::Enigmini;
use crate::position::Position;
use crate::search::combinations::{Matching, PlugboardCombinations};

/// Result of decrypting under one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The produced plaintext guess.
    Plaintext(String),
    /// Why the candidate could not be evaluated.
    Failed(String),
}

/// One row of brute-force output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRecord {
    /// 0-based candidate number in enumeration order.
    pub index: usize,
    /// Human-readable plugboard label, e.g. `"1-2 3-6"` or `"none"`.
    pub label: String,
    pub plugboard: Vec<(Position, Position)>,
    pub outcome: Outcome,
}

impl SearchRecord {
    /// Returns the plaintext guess, if the candidate succeeded.
    pub fn plaintext(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Plaintext(text) => Some(text),
            Outcome::Failed(_) => None,
        }
    }
}

/// Exhaustive search over plugboard candidates for a fixed machine.
#[derive(Debug, Clone)]
pub struct PlugboardSearch {
    prototype: Enigmini,
    candidates: PlugboardCombinations,
}

impl PlugboardSearch {
    /// Creates a search that tries every matching of `candidates` on copies
    /// of `prototype`.
    ///
    /// The prototype's own plugboard is replaced for each candidate; its
    /// rotors define the starting state of every run.
    pub fn new(prototype: Enigmini, candidates: PlugboardCombinations) -> Self {
        PlugboardSearch {
            prototype,
            candidates,
        }
    }

    /// Creates a search over matchings of every machine position.
    pub fn over_all_positions(prototype: Enigmini) -> Self {
        Self::new(prototype, PlugboardCombinations::all_positions())
    }

    /// Number of candidates a run evaluates.
    pub fn candidate_count(&self) -> u128 {
        self.candidates.count()
    }

    /// Evaluates every candidate in turn.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmini::config::MachineConfig;
    /// use enigmini::search::PlugboardSearch;
    ///
    /// let config = MachineConfig::from_json_str(r#"{
    ///     "keymap": ["A", "B", "C", "D", "E", "F"],
    ///     "rotors": [{ "shifts": [2, -1, 2, 2, 3, -2] }],
    ///     "reflector": [[1,5],[2,4],[3,6],[4,2],[5,1],[6,3]],
    ///     "plugboard": [[2, 6]]
    /// }"#).unwrap();
    /// let cipher = config.build().unwrap().encrypt("BEEFCAFE").unwrap();
    ///
    /// let search = PlugboardSearch::over_all_positions(config.build().unwrap());
    /// let records = search.run(&cipher);
    /// assert_eq!(records.len(), 76);
    /// assert!(records.iter().any(|r| r.plaintext() == Some("BEEFCAFE")));
    /// ```
    #[instrument(skip(self, ciphertext), fields(len = ciphertext.len()))]
    pub fn run(&self, ciphertext: &str) -> Vec<SearchRecord> {
        let total = self.candidate_count();
        info!(candidates = %total, "starting plugboard search");
        let records: Vec<SearchRecord> = self
            .candidates
            .iter()
            .enumerate()
            .map(|(index, matching)| {
                debug!("trying plug config {} of {}", index + 1, total);
                self.evaluate(index, matching, ciphertext)
            })
            .collect();
        self.log_summary(&records);
        records
    }

    /// Evaluates every candidate on the rayon thread pool.
    ///
    /// Records come back in enumeration order, identical to
    /// [`run`](Self::run).
    #[instrument(skip(self, ciphertext), fields(len = ciphertext.len()))]
    pub fn run_parallel(&self, ciphertext: &str) -> Vec<SearchRecord> {
        let matchings: Vec<Matching> = self.candidates.iter().collect();
        info!(candidates = matchings.len(), "starting parallel plugboard search");
        let records: Vec<SearchRecord> = matchings
            .into_par_iter()
            .enumerate()
            .map(|(index, matching)| self.evaluate(index, matching, ciphertext))
            .collect();
        self.log_summary(&records);
        records
    }

    /// Decrypts `ciphertext` on a fresh copy of the prototype wired with
    /// `matching`.
    fn evaluate(&self, index: usize, matching: Matching, ciphertext: &str) -> SearchRecord {
        let label = matching.to_string();
        let outcome = match matching.plugboard() {
            Ok(plugboard) => {
                let mut machine = self.prototype.with_plugboard(plugboard);
                match machine.decrypt(ciphertext) {
                    Ok(text) => Outcome::Plaintext(text),
                    Err(e) => {
                        warn!(candidate = index, plugboard = %label, "candidate failed: {}", e);
                        Outcome::Failed(e.to_string())
                    }
                }
            }
            Err(e) => {
                warn!(candidate = index, plugboard = %label, "invalid candidate: {}", e);
                Outcome::Failed(e.to_string())
            }
        };
        SearchRecord {
            index,
            label,
            plugboard: matching.pairs().to_vec(),
            outcome,
        }
    }

    fn log_summary(&self, records: &[SearchRecord]) {
        let failed = records.iter().filter(|r| r.plaintext().is_none()).count();
        info!(
            evaluated = records.len(),
            failed, "plugboard search finished"
        );
    }
}
