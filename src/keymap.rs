//! Keymap: bidirectional lookup between printable symbols and positions.
//!
//! Each position owns one [`KeyEntry`] holding a base glyph and, optionally,
//! a shifted glyph. The variant a symbol was typed with travels with the
//! signal so the output glyph keeps the same variant class.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{EnigminiError, Result};
use crate::position::{Position, POSITIONS};

/// Which glyph of a key entry a symbol corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Base,
    Shifted,
}

/// Glyphs assigned to a single position.
///
/// Deserializes from either a one-character string or a `[base, shifted]`
/// pair of one-character strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyEntry {
    Single(char),
    Pair([char; 2]),
}

impl KeyEntry {
    /// Returns the base glyph.
    pub fn base(&self) -> char {
        match *self {
            KeyEntry::Single(c) => c,
            KeyEntry::Pair([base, _]) => base,
        }
    }

    /// Returns the shifted glyph, if the entry has one.
    pub fn shifted(&self) -> Option<char> {
        match *self {
            KeyEntry::Single(_) => None,
            KeyEntry::Pair([_, shifted]) => Some(shifted),
        }
    }

    /// Returns the glyph for `variant`.
    ///
    /// Entries without a shifted glyph answer with their base glyph.
    pub fn glyph(&self, variant: Variant) -> char {
        match variant {
            Variant::Base => self.base(),
            Variant::Shifted => self.shifted().unwrap_or_else(|| self.base()),
        }
    }
}

/// Fixed table of key entries indexed by `position - 1`, with a reverse
/// index from glyph to `(position, variant)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    entries: [KeyEntry; POSITIONS],
    index: HashMap<char, (Position, Variant)>,
}

impl Keymap {
    /// Builds a keymap from one entry per position, in position order.
    ///
    /// # Errors
    /// - [`EnigminiError::KeymapLength`] if `entries.len() != POSITIONS`.
    /// - [`EnigminiError::DuplicateSymbol`] if any glyph appears twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmini::keymap::{KeyEntry, Keymap, Variant};
    /// use enigmini::position::Position;
    ///
    /// let keymap = Keymap::new(&[
    ///     KeyEntry::Single('A'),
    ///     KeyEntry::Pair(['1', '!']),
    ///     KeyEntry::Single('C'),
    ///     KeyEntry::Single('D'),
    ///     KeyEntry::Single('E'),
    ///     KeyEntry::Single('F'),
    /// ])
    /// .unwrap();
    ///
    /// let (pos, variant) = keymap.locate('!').unwrap();
    /// assert_eq!(pos.get(), 2);
    /// assert_eq!(variant, Variant::Shifted);
    /// assert_eq!(keymap.glyph(Position::new(2).unwrap(), Variant::Base), '1');
    /// ```
    pub fn new(entries: &[KeyEntry]) -> Result<Self> {
        let entries: [KeyEntry; POSITIONS] =
            entries
                .try_into()
                .map_err(|_| EnigminiError::KeymapLength {
                    expected: POSITIONS,
                    found: entries.len(),
                })?;

        let mut index = HashMap::with_capacity(POSITIONS * 2);
        for (i, entry) in entries.iter().enumerate() {
            let position = Position::from_index(i);
            let glyphs = [
                Some((entry.base(), Variant::Base)),
                entry.shifted().map(|c| (c, Variant::Shifted)),
            ];
            for (glyph, variant) in glyphs.into_iter().flatten() {
                if index.insert(glyph, (position, variant)).is_some() {
                    return Err(EnigminiError::DuplicateSymbol(glyph));
                }
            }
        }

        Ok(Keymap { entries, index })
    }

    /// Finds the position and variant class of `symbol`.
    ///
    /// # Errors
    /// Returns [`EnigminiError::UnknownSymbol`] if no entry holds `symbol`.
    pub fn locate(&self, symbol: char) -> Result<(Position, Variant)> {
        self.index
            .get(&symbol)
            .copied()
            .ok_or(EnigminiError::UnknownSymbol(symbol))
    }

    /// Returns the glyph of `variant` at `position`.
    pub fn glyph(&self, position: Position, variant: Variant) -> char {
        self.entries[position.index()].glyph(variant)
    }

    /// Returns the entry owned by `position`.
    pub fn entry(&self, position: Position) -> KeyEntry {
        self.entries[position.index()]
    }

    /// Returns `true` if `symbol` has an entry.
    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Iterates over every glyph in the keymap.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.entries
            .iter()
            .flat_map(|e| std::iter::once(e.base()).chain(e.shifted()))
    }
}
