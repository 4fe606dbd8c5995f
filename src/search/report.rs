//! Character-level comparison of a machine result against a reference text.

use std::fmt;

use serde::Serialize;

/// Outcome of [`mark_diffs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    pub reference: String,
    /// The result with every differing character wrapped in brackets.
    /// Characters missing from the result are shown as `_`.
    pub marked: String,
    /// Number of differing character positions.
    pub count: usize,
}

impl DiffReport {
    /// Differing positions as a percentage of the reference length.
    pub fn percentage(&self) -> f64 {
        let len = self.reference.chars().count();
        if len == 0 {
            return 0.0;
        }
        self.count as f64 / len as f64 * 100.0
    }

    /// `true` when result and reference agree everywhere.
    pub fn is_match(&self) -> bool {
        self.count == 0
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "REF: {}", self.reference)?;
        writeln!(f, "RES: {}", self.marked)?;
        write!(f, "Differences: {} ({}%)", self.count, self.percentage())
    }
}

/// Compares `result` with `reference` character by character.
///
/// # Examples
///
/// ```
/// use enigmini::search::mark_diffs;
///
/// let report = mark_diffs("ABXD", "ABCD");
/// assert_eq!(report.marked, "AB[X]D");
/// assert_eq!(report.count, 1);
/// assert_eq!(report.percentage(), 25.0);
/// ```
pub fn mark_diffs(result: &str, reference: &str) -> DiffReport {
    let res: Vec<char> = result.chars().collect();
    let reference_chars: Vec<char> = reference.chars().collect();
    let len = res.len().max(reference_chars.len());

    let mut marked = String::with_capacity(result.len() + 8);
    let mut count = 0;
    for i in 0..len {
        match (res.get(i), reference_chars.get(i)) {
            (Some(r), Some(e)) if r == e => marked.push(*r),
            (r, _) => {
                count += 1;
                marked.push('[');
                marked.push(r.copied().unwrap_or('_'));
                marked.push(']');
            }
        }
    }

    DiffReport {
        reference: reference.to_string(),
        marked,
        count,
    }
}
