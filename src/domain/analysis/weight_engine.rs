//! Weight Engine - AHP criterion weights from pairwise judgments.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::criteria::ensure_unique_names;
use super::{AnalysisError, Criterion, JudgmentSet, PairwiseMatrix};

/// Derived weights must sum to 1 within this tolerance.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Externally supplied weights are accepted within this tolerance.
pub const EXTERNAL_WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Non-negative weights, one per criterion, summing to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Validates weights that did not come from the engine.
    ///
    /// # Errors
    /// - `EmptyInput` when `values` is empty
    /// - `InvalidWeights` when a weight is negative or not finite, or the sum
    ///   is not 1
    pub fn try_from_values(values: Vec<f64>) -> Result<Self, AnalysisError> {
        if values.is_empty() {
            return Err(AnalysisError::EmptyInput("weights"));
        }
        if let Some((index, value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(AnalysisError::InvalidWeights(format!(
                "weight {} is {}",
                index, value
            )));
        }
        let sum: f64 = values.iter().sum();
        if (sum - 1.0).abs() > EXTERNAL_WEIGHT_SUM_TOLERANCE {
            return Err(AnalysisError::InvalidWeights(format!(
                "weights sum to {}, expected 1",
                sum
            )));
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl TryFrom<Vec<f64>> for WeightVector {
    type Error = AnalysisError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from_values(values)
    }
}

impl From<WeightVector> for Vec<f64> {
    fn from(weights: WeightVector) -> Self {
        weights.0
    }
}

/// A criterion name paired with its weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeight {
    pub name: String,
    pub weight: f64,
}

/// Output of [`WeightEngine::compute_weights`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightComputation {
    pub criteria: Vec<String>,
    pub matrix: PairwiseMatrix,
    pub weights: WeightVector,
}

impl WeightComputation {
    /// Weights paired with their criterion names, in criterion order.
    pub fn named_weights(&self) -> Vec<CriterionWeight> {
        self.criteria
            .iter()
            .zip(self.weights.values())
            .map(|(name, weight)| CriterionWeight {
                name: name.clone(),
                weight: *weight,
            })
            .collect()
    }
}

/// Derives criterion weights with the row-sum/normalize approximation of
/// the principal eigenvector.
///
/// No consistency ratio is computed: arbitrarily inconsistent judgments
/// still produce a weight vector.
pub struct WeightEngine;

impl WeightEngine {
    /// Computes normalized weights for `criteria` from `judgments`.
    ///
    /// # Algorithm
    /// 1. Build the reciprocal matrix (diagonal 1, lower = 1 / mirrored upper)
    /// 2. Divide every entry by its column sum
    /// 3. weight[i] = mean of normalized row i
    ///
    /// # Errors
    /// - `EmptyInput` when there are no criteria
    /// - `DuplicateName` when two criteria share a name
    /// - `IncompleteJudgmentSet` when an upper-triangle pair is missing
    /// - `InvalidJudgmentPair` when a judgment points past the last criterion
    pub fn compute_weights(
        criteria: &[Criterion],
        judgments: &JudgmentSet,
    ) -> Result<WeightComputation, AnalysisError> {
        if criteria.is_empty() {
            return Err(AnalysisError::EmptyInput("criteria"));
        }
        ensure_unique_names("criterion", criteria.iter().map(|c| c.name.as_str()))?;

        let matrix = PairwiseMatrix::build(criteria.len(), judgments)?;
        let weights = Self::weights_from_matrix(&matrix);

        debug!(
            criteria = criteria.len(),
            judgments = judgments.len(),
            weights = ?weights.values(),
            "Computed criterion weights"
        );

        Ok(WeightComputation {
            criteria: criteria.iter().map(|c| c.name.clone()).collect(),
            matrix,
            weights,
        })
    }

    /// Averages the rows of the column-normalized matrix.
    pub fn weights_from_matrix(matrix: &PairwiseMatrix) -> WeightVector {
        let size = matrix.size() as f64;
        let values = matrix
            .normalized()
            .iter()
            .map(|row| row.iter().sum::<f64>() / size)
            .collect();
        WeightVector(values)
    }
}
