//! Pairwise Matrix - Full reciprocal comparison matrix derived from judgments.

use serde::Serialize;

use super::{AnalysisError, JudgmentSet};

/// Square reciprocal matrix built from a [`JudgmentSet`].
///
/// # Invariants
/// - `rows[i][i] == 1`
/// - `rows[j][i] == 1 / rows[i][j]` for every `i != j`
///
/// The matrix is always derived fresh from the judgment set; it exposes no
/// way to change a cell after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairwiseMatrix {
    rows: Vec<Vec<f64>>,
}

impl PairwiseMatrix {
    /// Builds the full `size`x`size` matrix.
    ///
    /// # Errors
    /// - `InvalidJudgmentPair` if a judgment refers to an index `>= size`
    /// - `IncompleteJudgmentSet` if any upper-triangle pair is missing
    pub fn build(size: usize, judgments: &JudgmentSet) -> Result<Self, AnalysisError> {
        if let Some(&(row, col)) = judgments.out_of_bounds_pairs(size).first() {
            return Err(AnalysisError::InvalidJudgmentPair { row, col, size });
        }

        let missing = judgments.missing_pairs(size);
        if let Some(&(row, col)) = missing.first() {
            return Err(AnalysisError::IncompleteJudgmentSet {
                row,
                col,
                missing: missing.len(),
            });
        }

        let rows = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| Self::entry(judgments, row, col))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }

    fn entry(judgments: &JudgmentSet, row: usize, col: usize) -> Result<f64, AnalysisError> {
        if row == col {
            return Ok(1.0);
        }
        judgments
            .value(row, col)
            .ok_or(AnalysisError::IncompleteJudgmentSet {
                row: row.min(col),
                col: row.max(col),
                missing: 1,
            })
    }

    /// Returns the number of criteria (rows).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns the rows of the matrix.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Sum of each column.
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.size()];
        for row in &self.rows {
            for (sum, value) in sums.iter_mut().zip(row) {
                *sum += value;
            }
        }
        sums
    }

    /// Each entry divided by its column sum; every column then sums to 1.
    pub fn normalized(&self) -> Vec<Vec<f64>> {
        let sums = self.column_sums();
        self.rows
            .iter()
            .map(|row| row.iter().zip(&sums).map(|(value, sum)| value / sum).collect())
            .collect()
    }
}
