//! Plugboard combination generator.
//!
//! Enumerates every partial matching (set of disjoint unordered pairs) over
//! a list of distinct positions, including the empty matching. Each
//! matching is produced exactly once.
//!
//! The enumeration is a depth-first walk: the first remaining position is
//! either left unplugged or paired with one of the positions after it, and
//! the rest is matched recursively. Pairs are always emitted as
//! `(earlier, later)` in input order, so no matching can appear under two
//! orderings.

use std::fmt;

use serde::Serialize;

use crate::error::{EnigminiError, Result};
use crate::plugboard::Plugboard;
use crate::position::{Position, POSITIONS};

/// Number of partial matchings over `m` elements:
/// `Σ_k m! / ((m − 2k)! · k! · 2^k)`.
///
/// Returns `None` when the count does not fit in a `u128` (from `m = 55`
/// on).
///
/// # Examples
///
/// ```
/// use enigmini::search::matching_count;
///
/// assert_eq!(matching_count(0), Some(1));
/// assert_eq!(matching_count(4), Some(10));
/// assert_eq!(matching_count(6), Some(76));
/// assert_eq!(matching_count(200), None);
/// ```
pub fn matching_count(m: usize) -> Option<u128> {
    // T(n) = T(n−1) + (n−1)·T(n−2), T(0) = T(1) = 1
    let (mut prev, mut current): (u128, u128) = (1, 1);
    for n in 2..=m {
        let paired = (n as u128 - 1).checked_mul(prev)?;
        let next = current.checked_add(paired)?;
        prev = current;
        current = next;
    }
    Some(current)
}

/// One candidate plugboard: disjoint position pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Matching(Vec<(Position, Position)>);

impl Matching {
    /// Pairs as `(earlier, later)` in input order.
    pub fn pairs(&self) -> &[(Position, Position)] {
        &self.0
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for the unplugged candidate.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds the plugboard wired by this matching.
    pub fn plugboard(&self) -> Result<Plugboard> {
        Plugboard::new(&self.0)
    }
}

impl fmt::Display for Matching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "none");
        }
        for (i, (a, b)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}-{}", a, b)?;
        }
        Ok(())
    }
}

/// Restartable source of every matching over a fixed list of positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlugboardCombinations {
    positions: Vec<Position>,
}

impl PlugboardCombinations {
    /// Creates a generator over `positions`.
    ///
    /// # Errors
    /// Returns [`EnigminiError::DuplicateCandidate`] if a position is listed
    /// more than once.
    pub fn new(positions: &[Position]) -> Result<Self> {
        let mut seen = [false; POSITIONS];
        for p in positions {
            if seen[p.index()] {
                return Err(EnigminiError::DuplicateCandidate(p.get()));
            }
            seen[p.index()] = true;
        }
        Ok(PlugboardCombinations {
            positions: positions.to_vec(),
        })
    }

    /// Creates a generator from raw position numbers.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmini::search::PlugboardCombinations;
    ///
    /// let combos = PlugboardCombinations::from_raw(&[1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(combos.iter().count(), 76);
    /// ```
    pub fn from_raw(positions: &[u8]) -> Result<Self> {
        let typed = positions
            .iter()
            .map(|&v| Position::new(v))
            .collect::<Result<Vec<_>>>()?;
        Self::new(&typed)
    }

    /// Generator over every machine position.
    pub fn all_positions() -> Self {
        PlugboardCombinations {
            positions: Position::all().collect(),
        }
    }

    /// Positions the matchings are drawn from.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of matchings [`iter`](Self::iter) yields.
    pub fn count(&self) -> u128 {
        // at most `POSITIONS` distinct inputs, far below the overflow bound
        matching_count(self.positions.len()).unwrap_or(u128::MAX)
    }

    /// Starts a new lazy walk over all matchings.
    pub fn iter(&self) -> Matchings {
        Matchings {
            stack: vec![Frame {
                remaining: self.positions.clone(),
                pairs: Vec::new(),
            }],
        }
    }
}

impl IntoIterator for &PlugboardCombinations {
    type Item = Matching;
    type IntoIter = Matchings;

    fn into_iter(self) -> Matchings {
        self.iter()
    }
}

/// Partially built matching awaiting expansion.
#[derive(Debug, Clone)]
struct Frame {
    remaining: Vec<Position>,
    pairs: Vec<(Position, Position)>,
}

/// Lazy iterator over matchings, see [`PlugboardCombinations::iter`].
#[derive(Debug, Clone)]
pub struct Matchings {
    stack: Vec<Frame>,
}

impl Iterator for Matchings {
    type Item = Matching;

    fn next(&mut self) -> Option<Matching> {
        while let Some(frame) = self.stack.pop() {
            let Some((&first, rest)) = frame.remaining.split_first() else {
                return Some(Matching(frame.pairs));
            };

            // pushed in reverse so that "leave unplugged" is explored first
            for j in (0..rest.len()).rev() {
                let mut remaining = rest.to_vec();
                let partner = remaining.remove(j);
                let mut pairs = frame.pairs.clone();
                pairs.push((first, partner));
                self.stack.push(Frame { remaining, pairs });
            }
            self.stack.push(Frame {
                remaining: rest.to_vec(),
                pairs: frame.pairs,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashSet};

    fn canonical(m: &Matching) -> BTreeSet<(u8, u8)> {
        m.pairs()
            .iter()
            .map(|&(a, b)| (a.get().min(b.get()), a.get().max(b.get())))
            .collect()
    }

    #[test]
    fn test_six_positions_yield_76() {
        let combos = PlugboardCombinations::all_positions();
        let all: Vec<Matching> = combos.iter().collect();
        assert_eq!(all.len(), 76);
        assert_eq!(combos.count(), 76);
    }

    #[test]
    fn test_no_duplicates() {
        let combos = PlugboardCombinations::all_positions();
        let distinct: HashSet<BTreeSet<(u8, u8)>> = combos.iter().map(|m| canonical(&m)).collect();
        assert_eq!(distinct.len(), 76);
    }

    #[test]
    fn test_no_repeated_position_within_matching() {
        for m in PlugboardCombinations::all_positions().iter() {
            let mut seen = HashSet::new();
            for &(a, b) in m.pairs() {
                assert_ne!(a, b);
                assert!(seen.insert(a), "{} repeated in {}", a, m);
                assert!(seen.insert(b), "{} repeated in {}", b, m);
            }
        }
    }

    #[test]
    fn test_counts_by_size() {
        let mut by_size = [0usize; 4];
        for m in PlugboardCombinations::all_positions().iter() {
            by_size[m.len()] += 1;
        }
        assert_eq!(by_size, [1, 15, 45, 15]);
    }

    #[test]
    fn test_empty_matching_first() {
        let first = PlugboardCombinations::all_positions().iter().next().unwrap();
        assert!(first.is_empty());
        assert_eq!(first.to_string(), "none");
    }

    #[test]
    fn test_small_inputs() {
        assert_eq!(PlugboardCombinations::from_raw(&[]).unwrap().iter().count(), 1);
        assert_eq!(PlugboardCombinations::from_raw(&[3]).unwrap().iter().count(), 1);
        assert_eq!(PlugboardCombinations::from_raw(&[3, 5]).unwrap().iter().count(), 2);
        assert_eq!(PlugboardCombinations::from_raw(&[1, 2, 3]).unwrap().iter().count(), 4);
        assert_eq!(PlugboardCombinations::from_raw(&[6, 2, 4, 1]).unwrap().iter().count(), 10);
    }

    #[test]
    fn test_restartable() {
        let combos = PlugboardCombinations::from_raw(&[1, 2, 3, 4]).unwrap();
        let first: Vec<Matching> = combos.iter().collect();
        let second: Vec<Matching> = (&combos).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_only_listed_positions_used() {
        let combos = PlugboardCombinations::from_raw(&[2, 5, 6]).unwrap();
        for m in combos.iter() {
            for &(a, b) in m.pairs() {
                assert!([2, 5, 6].contains(&a.get()));
                assert!([2, 5, 6].contains(&b.get()));
            }
        }
    }

    #[test]
    fn test_duplicate_input_rejected() {
        assert!(matches!(
            PlugboardCombinations::from_raw(&[1, 2, 1]),
            Err(EnigminiError::DuplicateCandidate(1))
        ));
    }

    #[test]
    fn test_matching_count_formula() {
        let expected = [1u128, 1, 2, 4, 10, 26, 76, 232, 764];
        for (m, &count) in expected.iter().enumerate() {
            assert_eq!(matching_count(m), Some(count), "m = {}", m);
        }
    }

    #[test]
    fn test_matching_count_overflow_is_none() {
        assert!(matching_count(54).is_some());
        assert_eq!(matching_count(55), None);
        assert_eq!(matching_count(usize::MAX), None);
    }

    #[test]
    fn test_every_matching_builds_a_plugboard() {
        for m in PlugboardCombinations::all_positions().iter() {
            let board = m.plugboard().unwrap();
            assert_eq!(board.pairs().len(), m.len());
            assert_eq!(board.to_string(), m.to_string());
        }
    }
}
