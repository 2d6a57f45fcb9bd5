//! Judgment Set - The authoritative upper triangle of a pairwise comparison.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::AnalysisError;
use crate::domain::foundation::JudgmentValue;

/// "Criterion `row` is `value` times as important as criterion `col`."
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairwiseJudgment {
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

impl PairwiseJudgment {
    pub fn new(row: usize, col: usize, value: f64) -> Self {
        Self { row, col, value }
    }
}

/// Upper-triangle judgments keyed by `(row, col)` with `row < col`.
///
/// Lower-triangle entries are never stored; they are derived as
/// reciprocals whenever a matrix is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JudgmentSet {
    entries: BTreeMap<(usize, usize), JudgmentValue>,
}

impl JudgmentSet {
    /// Creates an empty judgment set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a complete set for `size` criteria where every pair is equally
    /// important.
    pub fn indifferent(size: usize) -> Self {
        let entries = upper_pairs(size)
            .map(|pair| (pair, JudgmentValue::EQUAL))
            .collect();
        Self { entries }
    }

    /// Builds a set from raw judgments, validating each one.
    pub fn from_judgments(
        judgments: impl IntoIterator<Item = PairwiseJudgment>,
    ) -> Result<Self, AnalysisError> {
        let mut set = Self::new();
        for judgment in judgments {
            set.insert(judgment.row, judgment.col, judgment.value)?;
        }
        Ok(set)
    }

    /// Records a judgment.
    ///
    /// A lower-triangle pair `(j, i, v)` is stored as `(i, j, 1/v)`.
    /// Replaces any earlier judgment for the same pair.
    ///
    /// # Errors
    /// - `InvalidJudgmentPair` when `row == col`
    /// - `ValueOutOfRange` when `value` is not on the 1/9..9 scale
    pub fn insert(&mut self, row: usize, col: usize, value: f64) -> Result<(), AnalysisError> {
        if row == col {
            return Err(AnalysisError::InvalidJudgmentPair {
                row,
                col,
                size: row.max(col) + 1,
            });
        }

        let judgment = JudgmentValue::try_new(value)
            .map_err(|_| AnalysisError::ValueOutOfRange { row, col, value })?;

        self.insert_value(row, col, judgment);
        Ok(())
    }

    /// Records an already-validated judgment, orienting it into the upper triangle.
    pub fn insert_value(&mut self, row: usize, col: usize, value: JudgmentValue) {
        if row < col {
            self.entries.insert((row, col), value);
        } else if row > col {
            self.entries.insert((col, row), value.reciprocal());
        }
    }

    /// Returns the matrix entry at `(row, col)` for any off-diagonal pair.
    ///
    /// Lower-triangle lookups return the reciprocal of the stored entry.
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        if row < col {
            self.entries.get(&(row, col)).map(JudgmentValue::value)
        } else {
            self.entries
                .get(&(col, row))
                .map(|v| v.reciprocal().value())
        }
    }

    /// Returns true if a judgment exists for the unordered pair.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&(row.min(col), row.max(col)))
    }

    /// Upper-triangle pairs of a `size`x`size` matrix that have no judgment.
    pub fn missing_pairs(&self, size: usize) -> Vec<(usize, usize)> {
        upper_pairs(size)
            .filter(|pair| !self.entries.contains_key(pair))
            .collect()
    }

    /// Stored pairs that do not fit a `size`x`size` matrix.
    pub fn out_of_bounds_pairs(&self, size: usize) -> Vec<(usize, usize)> {
        self.entries
            .keys()
            .filter(|(_, col)| *col >= size)
            .copied()
            .collect()
    }

    /// Returns the stored judgments in row-major order.
    pub fn judgments(&self) -> Vec<PairwiseJudgment> {
        self.entries
            .iter()
            .map(|(&(row, col), value)| PairwiseJudgment::new(row, col, value.value()))
            .collect()
    }

    /// Returns the number of stored judgments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no judgments are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All `(row, col)` pairs with `row < col < size`, row-major.
pub fn upper_pairs(size: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..size).flat_map(move |row| ((row + 1)..size).map(move |col| (row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_pairs_enumerates_row_major() {
        let pairs: Vec<_> = upper_pairs(3).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(upper_pairs(1).count(), 0);
        assert_eq!(upper_pairs(5).count(), 10);
    }

    #[test]
    fn indifferent_set_is_complete_and_all_ones() {
        let set = JudgmentSet::indifferent(4);
        assert_eq!(set.len(), 6);
        assert!(set.missing_pairs(4).is_empty());
        assert!(set.judgments().iter().all(|j| j.value == 1.0));
    }

    #[test]
    fn insert_stores_upper_triangle() {
        let mut set = JudgmentSet::new();
        set.insert(0, 1, 3.0).unwrap();
        assert_eq!(set.value(0, 1), Some(3.0));
        assert!((set.value(1, 0).unwrap() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn insert_lower_triangle_stores_reciprocal() {
        let mut set = JudgmentSet::new();
        set.insert(2, 0, 4.0).unwrap();
        assert_eq!(set.value(0, 2), Some(0.25));
        assert_eq!(set.value(2, 0), Some(4.0));
        assert_eq!(set.judgments(), vec![PairwiseJudgment::new(0, 2, 0.25)]);
    }

    #[test]
    fn insert_replaces_earlier_judgment() {
        let mut set = JudgmentSet::new();
        set.insert(0, 1, 3.0).unwrap();
        set.insert(1, 0, 2.0).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.value(0, 1), Some(0.5));
    }

    #[test]
    fn insert_rejects_diagonal() {
        let mut set = JudgmentSet::new();
        assert!(matches!(
            set.insert(1, 1, 1.0),
            Err(AnalysisError::InvalidJudgmentPair { row: 1, col: 1, .. })
        ));
    }

    #[test]
    fn insert_rejects_values_off_scale() {
        let mut set = JudgmentSet::new();
        assert_eq!(
            set.insert(0, 1, 10.0),
            Err(AnalysisError::ValueOutOfRange {
                row: 0,
                col: 1,
                value: 10.0
            })
        );
        assert!(set.insert(0, 1, 0.0).is_err());
        assert!(set.is_empty());
    }

    #[test]
    fn missing_and_out_of_bounds_pairs() {
        let set = JudgmentSet::from_judgments([
            PairwiseJudgment::new(0, 1, 2.0),
            PairwiseJudgment::new(1, 3, 2.0),
        ])
        .unwrap();

        assert_eq!(set.missing_pairs(3), vec![(0, 2), (1, 2)]);
        assert_eq!(set.out_of_bounds_pairs(3), vec![(1, 3)]);
        assert!(set.contains(1, 0));
        assert!(!set.contains(0, 2));
    }

    #[test]
    fn from_judgments_stops_at_first_invalid_value() {
        let result = JudgmentSet::from_judgments([
            PairwiseJudgment::new(0, 1, 2.0),
            PairwiseJudgment::new(0, 2, 20.0),
        ]);
        assert!(matches!(
            result,
            Err(AnalysisError::ValueOutOfRange { row: 0, col: 2, .. })
        ));
    }
}
