//! Ranking Engine - TOPSIS closeness ranking of alternatives.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::criteria::ensure_unique_names;
use super::{AnalysisError, WeightVector};

/// Closeness assigned when an alternative is at zero weighted distance from
/// both the ideal and the negative-ideal solution. This happens when every
/// alternative agrees on all criteria that carry a non-zero weight.
pub const TIED_CLOSENESS: f64 = 0.5;

/// An alternative (scenario) with one score per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub scores: Vec<f64>,
}

impl Alternative {
    pub fn new(name: impl Into<String>, scores: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            scores,
        }
    }
}

/// Distances and closeness of a single alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub name: String,
    /// Closeness coefficient in [0, 1]; higher is better.
    pub performance_score: f64,
    /// Weighted distance to the ideal solution.
    pub positive_distance: f64,
    /// Weighted distance to the negative-ideal solution.
    pub negative_distance: f64,
    /// Position of the alternative in the caller's input.
    pub input_index: usize,
}

/// Output of [`RankingEngine::rank_alternatives`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// Best observed score per criterion.
    pub ideal_solution: Vec<f64>,
    /// Worst observed score per criterion.
    pub negative_ideal_solution: Vec<f64>,
    /// Results ordered by descending performance score.
    pub results: Vec<RankedResult>,
}

impl Ranking {
    /// Returns the top-ranked alternative.
    pub fn best(&self) -> Option<&RankedResult> {
        self.results.first()
    }

    /// Returns the 1-based rank of the named alternative.
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.results
            .iter()
            .position(|r| r.name == name)
            .map(|index| index + 1)
    }

    /// Alternative names in ranked order.
    pub fn order(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.name.as_str()).collect()
    }
}

/// TOPSIS ranking over benefit-type criteria.
pub struct RankingEngine;

impl RankingEngine {
    /// Ranks `alternatives` by closeness to the ideal solution.
    ///
    /// # Algorithm
    /// 1. ideal[i] = max score[i], negative_ideal[i] = min score[i]
    /// 2. d+ = sqrt(Σ((ideal[i] - score[i]) * w[i])²), d- likewise
    /// 3. closeness = d- / (d+ + d-), or 0.5 when both are zero
    /// 4. Stable sort by descending closeness
    ///
    /// # Errors
    /// - `EmptyInput` when weights or alternatives are empty
    /// - `DimensionMismatch` when a score vector length differs from the weights
    /// - `NonFiniteScore` when a score is NaN or infinite
    /// - `DuplicateName` when two alternatives share a name
    pub fn rank_alternatives(
        weights: &WeightVector,
        alternatives: &[Alternative],
    ) -> Result<Ranking, AnalysisError> {
        Self::validate(weights, alternatives)?;

        let (ideal_solution, negative_ideal_solution) =
            Self::ideal_solutions(weights.len(), alternatives);
        let scale = Self::magnitude(alternatives);

        let mut results: Vec<RankedResult> = alternatives
            .iter()
            .enumerate()
            .map(|(input_index, alternative)| {
                let positive = Self::scaled_distance(
                    &ideal_solution,
                    &alternative.scores,
                    weights.values(),
                    scale,
                );
                let negative = Self::scaled_distance(
                    &alternative.scores,
                    &negative_ideal_solution,
                    weights.values(),
                    scale,
                );
                RankedResult {
                    name: alternative.name.clone(),
                    performance_score: Self::closeness(positive, negative),
                    positive_distance: positive * scale,
                    negative_distance: negative * scale,
                    input_index,
                }
            })
            .collect();

        // sort_by is stable: equal scores keep input order.
        results.sort_by(|a, b| b.performance_score.total_cmp(&a.performance_score));

        debug!(
            alternatives = results.len(),
            best = results.first().map(|r| r.name.as_str()),
            "Ranked alternatives"
        );

        Ok(Ranking {
            ideal_solution,
            negative_ideal_solution,
            results,
        })
    }

    fn validate(weights: &WeightVector, alternatives: &[Alternative]) -> Result<(), AnalysisError> {
        if weights.is_empty() {
            return Err(AnalysisError::EmptyInput("weights"));
        }
        if alternatives.is_empty() {
            return Err(AnalysisError::EmptyInput("alternatives"));
        }
        ensure_unique_names("alternative", alternatives.iter().map(|a| a.name.as_str()))?;

        for alternative in alternatives {
            if alternative.scores.len() != weights.len() {
                return Err(AnalysisError::DimensionMismatch {
                    alternative: alternative.name.clone(),
                    expected: weights.len(),
                    actual: alternative.scores.len(),
                });
            }
            if let Some(criterion) = alternative.scores.iter().position(|s| !s.is_finite()) {
                return Err(AnalysisError::NonFiniteScore {
                    alternative: alternative.name.clone(),
                    criterion,
                });
            }
        }
        Ok(())
    }

    /// Per-criterion maximum and minimum over all alternatives.
    fn ideal_solutions(criteria: usize, alternatives: &[Alternative]) -> (Vec<f64>, Vec<f64>) {
        let mut ideal = vec![f64::NEG_INFINITY; criteria];
        let mut negative_ideal = vec![f64::INFINITY; criteria];

        for alternative in alternatives {
            for ((best, worst), score) in ideal
                .iter_mut()
                .zip(negative_ideal.iter_mut())
                .zip(&alternative.scores)
            {
                *best = best.max(*score);
                *worst = worst.min(*score);
            }
        }

        (ideal, negative_ideal)
    }

    /// Largest absolute score, or 1 when every score is zero.
    fn magnitude(alternatives: &[Alternative]) -> f64 {
        let largest = alternatives
            .iter()
            .flat_map(|a| a.scores.iter())
            .fold(0.0_f64, |acc, s| acc.max(s.abs()));
        if largest > 0.0 {
            largest
        } else {
            1.0
        }
    }

    /// Weighted Euclidean distance of the scores divided by `scale`.
    ///
    /// Closeness is invariant under a common scale, and keeping every term
    /// within [-2, 2] rules out overflow and underflow of the squares.
    fn scaled_distance(from: &[f64], to: &[f64], weights: &[f64], scale: f64) -> f64 {
        from.iter()
            .zip(to)
            .zip(weights)
            .map(|((a, b), w)| (a / scale - b / scale) * w)
            .fold(0.0, f64::hypot)
    }

    fn closeness(positive_distance: f64, negative_distance: f64) -> f64 {
        let total = positive_distance + negative_distance;
        if total == 0.0 {
            return TIED_CLOSENESS;
        }
        negative_distance / total
    }
}
