//! Decision Report - Structured output handed to presentation layers.

use serde::Serialize;

use super::{Criterion, CriterionWeight, PairwiseMatrix, Ranking, WeightComputation};

/// Weights, the matrix they came from, and optionally a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub criteria: Vec<Criterion>,
    pub weights: Vec<CriterionWeight>,
    pub matrix: PairwiseMatrix,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<Ranking>,
}

impl DecisionReport {
    /// Creates a weights-only report.
    pub fn from_weights(
        title: Option<String>,
        criteria: &[Criterion],
        computation: WeightComputation,
    ) -> Self {
        Self {
            title,
            criteria: criteria.to_vec(),
            weights: computation.named_weights(),
            matrix: computation.matrix,
            ranking: None,
        }
    }

    /// Attaches a ranking.
    pub fn with_ranking(mut self, ranking: Ranking) -> Self {
        self.ranking = Some(ranking);
        self
    }
}
