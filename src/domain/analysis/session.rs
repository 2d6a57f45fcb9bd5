//! Decision Session - Caller-owned criteria, judgments and alternatives.

use std::collections::BTreeMap;

use tracing::debug;

use super::criteria::{ensure_unique_names, normalize_name};
use super::judgment_set::upper_pairs;
use super::{
    AnalysisError, Alternative, Criterion, DecisionProblem, JudgmentSet, Ranking, RankingEngine,
    WeightComputation, WeightEngine,
};
use crate::domain::foundation::JudgmentValue;

/// Working state of one weighting/ranking session.
///
/// Judgments are keyed by criterion *name*, so adding or removing a
/// criterion never re-targets a judgment at a different pair. Weights and
/// rankings are derived on every call and never cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionSession {
    criteria: Vec<Criterion>,
    /// Keyed by `(first, second)` as the caller stated them.
    judgments: BTreeMap<(String, String), JudgmentValue>,
    alternatives: Vec<Alternative>,
}

impl DecisionSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a session from a problem description.
    pub fn from_problem(problem: &DecisionProblem) -> Result<Self, AnalysisError> {
        let mut session = Self::new();

        for criterion in &problem.criteria {
            session.add_criterion(criterion.name.as_str())?;
            for variant in &criterion.variants {
                session.add_variant(criterion.name.trim(), variant.as_str())?;
            }
        }
        for judgment in &problem.judgments {
            session.set_judgment(
                judgment.first.trim(),
                judgment.second.trim(),
                judgment.value,
            )?;
        }
        if problem.fill_missing_with_indifference {
            session.fill_missing_with_indifference();
        }
        for alternative in &problem.alternatives {
            session.add_alternative(alternative.name.as_str(), alternative.scores.clone())?;
        }

        Ok(session)
    }

    /// Appends a criterion.
    ///
    /// # Errors
    /// - `Validation` when the name is blank
    /// - `DuplicateName` when the name is already taken
    pub fn add_criterion(&mut self, name: impl Into<String>) -> Result<(), AnalysisError> {
        let name = normalize_name("criterion", name)?;
        if self.index_of(&name).is_some() {
            return Err(AnalysisError::DuplicateName {
                kind: "criterion",
                name,
            });
        }
        debug!(criterion = %name, "Added criterion");
        self.criteria.push(Criterion::new(name));
        Ok(())
    }

    /// Removes a criterion and every judgment that names it.
    pub fn remove_criterion(&mut self, name: &str) -> Result<Criterion, AnalysisError> {
        let index = self
            .index_of(name)
            .ok_or_else(|| AnalysisError::UnknownCriterion(name.to_string()))?;
        self.judgments
            .retain(|(first, second), _| first != name && second != name);
        debug!(criterion = %name, "Removed criterion");
        Ok(self.criteria.remove(index))
    }

    /// Adds a variant to a criterion. Returns false if it already existed.
    pub fn add_variant(
        &mut self,
        criterion: &str,
        variant: impl Into<String>,
    ) -> Result<bool, AnalysisError> {
        let criterion = self
            .criteria
            .iter_mut()
            .find(|c| c.name == criterion)
            .ok_or_else(|| AnalysisError::UnknownCriterion(criterion.to_string()))?;
        Ok(criterion.add_variant(variant)?)
    }

    /// Records "`first` is `value` times as important as `second`".
    ///
    /// Replaces any earlier judgment on the same pair in either orientation.
    ///
    /// # Errors
    /// - `UnknownCriterion` when either name is not a criterion
    /// - `InvalidJudgmentPair` when both names are the same
    /// - `ValueOutOfRange` when `value` is not on the 1/9..9 scale
    pub fn set_judgment(
        &mut self,
        first: &str,
        second: &str,
        value: f64,
    ) -> Result<(), AnalysisError> {
        let row = self
            .index_of(first)
            .ok_or_else(|| AnalysisError::UnknownCriterion(first.to_string()))?;
        let col = self
            .index_of(second)
            .ok_or_else(|| AnalysisError::UnknownCriterion(second.to_string()))?;
        if row == col {
            return Err(AnalysisError::InvalidJudgmentPair {
                row,
                col,
                size: self.criteria.len(),
            });
        }
        let value = JudgmentValue::try_new(value)
            .map_err(|_| AnalysisError::ValueOutOfRange { row, col, value })?;

        self.judgments
            .remove(&(second.to_string(), first.to_string()));
        self.judgments
            .insert((first.to_string(), second.to_string()), value);
        Ok(())
    }

    /// Returns the matrix entry for `first` over `second`, if judged.
    pub fn judgment(&self, first: &str, second: &str) -> Option<JudgmentValue> {
        self.judgments
            .get(&(first.to_string(), second.to_string()))
            .copied()
            .or_else(|| {
                self.judgments
                    .get(&(second.to_string(), first.to_string()))
                    .map(JudgmentValue::reciprocal)
            })
    }

    /// Sets every unjudged pair to equal importance. Returns how many were set.
    pub fn fill_missing_with_indifference(&mut self) -> usize {
        let missing: Vec<(String, String)> = upper_pairs(self.criteria.len())
            .filter_map(|(row, col)| {
                let first = &self.criteria.get(row)?.name;
                let second = &self.criteria.get(col)?.name;
                self.judgment(first, second)
                    .is_none()
                    .then(|| (first.clone(), second.clone()))
            })
            .collect();

        let filled = missing.len();
        for key in missing {
            self.judgments.insert(key, JudgmentValue::EQUAL);
        }
        filled
    }

    /// Appends an alternative.
    ///
    /// Score-vector length is checked when ranking, since criteria may still
    /// change.
    pub fn add_alternative(
        &mut self,
        name: impl Into<String>,
        scores: Vec<f64>,
    ) -> Result<(), AnalysisError> {
        let name = normalize_name("alternative", name)?;
        ensure_unique_names(
            "alternative",
            self.alternatives
                .iter()
                .map(|a| a.name.as_str())
                .chain(std::iter::once(name.as_str())),
        )?;
        self.alternatives.push(Alternative::new(name, scores));
        Ok(())
    }

    /// Removes an alternative by name.
    pub fn remove_alternative(&mut self, name: &str) -> Option<Alternative> {
        let index = self.alternatives.iter().position(|a| a.name == name)?;
        Some(self.alternatives.remove(index))
    }

    /// Projects the name-keyed judgments onto the current criterion order.
    pub fn judgment_set(&self) -> JudgmentSet {
        let mut set = JudgmentSet::new();
        for (row, col) in upper_pairs(self.criteria.len()) {
            let (Some(first), Some(second)) = (self.criteria.get(row), self.criteria.get(col))
            else {
                continue;
            };
            if let Some(value) = self.judgment(&first.name, &second.name) {
                set.insert_value(row, col, value);
            }
        }
        set
    }

    /// Computes criterion weights from the current judgments.
    pub fn compute_weights(&self) -> Result<WeightComputation, AnalysisError> {
        WeightEngine::compute_weights(&self.criteria, &self.judgment_set())
    }

    /// Computes weights, then ranks the alternatives against them.
    pub fn rank(&self) -> Result<(WeightComputation, Ranking), AnalysisError> {
        let weights = self.compute_weights()?;
        let ranking = RankingEngine::rank_alternatives(&weights.weights, &self.alternatives)?;
        Ok((weights, ranking))
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Number of stored judgments.
    pub fn judgment_count(&self) -> usize {
        self.judgments.len()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.criteria.iter().position(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::NamedJudgment;

    fn cost_quality_speed() -> DecisionSession {
        let mut session = DecisionSession::new();
        session.add_criterion("Cost").unwrap();
        session.add_criterion("Quality").unwrap();
        session.add_criterion("Speed").unwrap();
        session.set_judgment("Cost", "Quality", 3.0).unwrap();
        session.set_judgment("Cost", "Speed", 5.0).unwrap();
        session.set_judgment("Quality", "Speed", 2.0).unwrap();
        session
    }

    #[test]
    fn add_criterion_rejects_duplicates_and_blanks() {
        let mut session = DecisionSession::new();
        session.add_criterion("Cost").unwrap();

        assert!(matches!(
            session.add_criterion(" Cost "),
            Err(AnalysisError::DuplicateName { .. })
        ));
        assert!(matches!(
            session.add_criterion(""),
            Err(AnalysisError::Validation(_))
        ));
        assert_eq!(session.criteria().len(), 1);
    }

    #[test]
    fn set_judgment_in_reverse_orientation_stores_reciprocal() {
        let mut session = DecisionSession::new();
        session.add_criterion("Cost").unwrap();
        session.add_criterion("Quality").unwrap();
        session.set_judgment("Quality", "Cost", 4.0).unwrap();

        let set = session.judgment_set();
        assert_eq!(set.value(0, 1), Some(0.25));
    }

    #[test]
    fn set_judgment_replaces_opposite_orientation() {
        let mut session = cost_quality_speed();
        session.set_judgment("Quality", "Cost", 2.0).unwrap();

        assert_eq!(session.judgment_count(), 3);
        assert_eq!(session.judgment("Cost", "Quality").map(|v| v.value()), Some(0.5));
    }

    #[test]
    fn set_judgment_rejects_unknown_and_self_pairs() {
        let mut session = cost_quality_speed();
        assert_eq!(
            session.set_judgment("Cost", "Risk", 2.0),
            Err(AnalysisError::UnknownCriterion("Risk".to_string()))
        );
        assert!(matches!(
            session.set_judgment("Cost", "Cost", 1.0),
            Err(AnalysisError::InvalidJudgmentPair { .. })
        ));
    }

    #[test]
    fn compute_weights_matches_engine() {
        let session = cost_quality_speed();
        let weights = session.compute_weights().unwrap();
        assert!((weights.weights.values()[0] - 0.648).abs() < 5e-4);
    }

    #[test]
    fn adding_criterion_keeps_existing_judgments_by_name() {
        let mut session = cost_quality_speed();
        session.add_criterion("Risk").unwrap();

        assert!(matches!(
            session.compute_weights(),
            Err(AnalysisError::IncompleteJudgmentSet { row: 0, col: 3, missing: 3 })
        ));

        session.set_judgment("Cost", "Risk", 1.0).unwrap();
        session.set_judgment("Quality", "Risk", 1.0).unwrap();
        session.set_judgment("Speed", "Risk", 1.0).unwrap();

        let set = session.judgment_set();
        assert_eq!(set.value(0, 1), Some(3.0));
        assert_eq!(set.value(1, 2), Some(2.0));
        assert!(session.compute_weights().is_ok());
    }

    #[test]
    fn removing_criterion_drops_its_judgments() {
        let mut session = cost_quality_speed();
        let removed = session.remove_criterion("Quality").unwrap();

        assert_eq!(removed.name, "Quality");
        assert_eq!(session.judgment_count(), 1);
        assert_eq!(session.judgment_set().value(0, 1), Some(5.0));
        assert!(session.compute_weights().is_ok());
    }

    #[test]
    fn remove_unknown_criterion_fails() {
        let mut session = cost_quality_speed();
        assert_eq!(
            session.remove_criterion("Risk"),
            Err(AnalysisError::UnknownCriterion("Risk".to_string()))
        );
    }

    #[test]
    fn fill_missing_with_indifference_completes_matrix() {
        let mut session = cost_quality_speed();
        session.add_criterion("Risk").unwrap();

        assert_eq!(session.fill_missing_with_indifference(), 3);
        assert_eq!(session.fill_missing_with_indifference(), 0);
        assert!(session.compute_weights().is_ok());
    }

    #[test]
    fn add_variant_requires_known_criterion() {
        let mut session = cost_quality_speed();
        assert!(session.add_variant("Cost", "low").unwrap());
        assert!(!session.add_variant("Cost", "low").unwrap());
        assert_eq!(
            session.add_variant("Risk", "high"),
            Err(AnalysisError::UnknownCriterion("Risk".to_string()))
        );
        assert_eq!(session.criteria()[0].variants, vec!["low"]);
    }

    #[test]
    fn add_alternative_rejects_duplicates() {
        let mut session = cost_quality_speed();
        session.add_alternative("A", vec![0.1, 0.2, 0.3]).unwrap();
        assert!(matches!(
            session.add_alternative("A", vec![0.3, 0.2, 0.1]),
            Err(AnalysisError::DuplicateName { kind: "alternative", .. })
        ));
        assert!(session.remove_alternative("A").is_some());
        assert!(session.alternatives().is_empty());
    }

    #[test]
    fn rank_checks_dimensions_against_current_criteria() {
        let mut session = cost_quality_speed();
        session.add_alternative("A", vec![0.7, 0.8]).unwrap();

        assert!(matches!(
            session.rank(),
            Err(AnalysisError::DimensionMismatch { expected: 3, actual: 2, .. })
        ));
    }

    #[test]
    fn rank_orders_alternatives() {
        let mut session = cost_quality_speed();
        session.add_alternative("Cheap", vec![0.9, 0.4, 0.5]).unwrap();
        session.add_alternative("Premium", vec![0.2, 0.9, 0.6]).unwrap();

        let (_, ranking) = session.rank().unwrap();
        assert_eq!(ranking.order(), vec!["Cheap", "Premium"]);
    }

    #[test]
    fn from_problem_builds_session() {
        let problem = DecisionProblem {
            title: None,
            criteria: vec![
                Criterion::with_variants("Cost", vec!["low", "high"]),
                Criterion::new("Quality"),
            ],
            judgments: vec![NamedJudgment::new("Cost", "Quality", 3.0)],
            alternatives: vec![Alternative::new("A", vec![0.5, 0.5])],
            fill_missing_with_indifference: false,
        };

        let session = DecisionSession::from_problem(&problem).unwrap();
        assert_eq!(session.criteria(), problem.criteria.as_slice());
        assert_eq!(session.judgment_count(), 1);
        assert_eq!(session.alternatives().len(), 1);
    }

    #[test]
    fn set_judgment_rejects_values_off_scale() {
        let mut session = cost_quality_speed();

        assert_eq!(
            session.set_judgment("Quality", "Speed", 12.0),
            Err(AnalysisError::ValueOutOfRange {
                row: 1,
                col: 2,
                value: 12.0,
            })
        );
        assert!(matches!(
            session.set_judgment("Cost", "Speed", f64::NAN),
            Err(AnalysisError::ValueOutOfRange { row: 0, col: 2, .. })
        ));
        assert_eq!(
            session.judgment("Quality", "Speed").map(|v| v.value()),
            Some(2.0)
        );
    }

    #[test]
    fn from_problem_reports_off_scale_judgment() {
        let problem = DecisionProblem {
            criteria: vec![Criterion::new("A"), Criterion::new("B")],
            judgments: vec![NamedJudgment::new("B", "A", 0.05)],
            ..DecisionProblem::default()
        };
        let err = DecisionSession::from_problem(&problem).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::ValueOutOfRange {
                row: 1,
                col: 0,
                value: 0.05,
            }
        );
        assert_eq!(err.code(), crate::domain::foundation::ErrorCode::OutOfRange);
    }

    #[test]
    fn from_problem_rejects_unknown_judgment_criterion() {
        let problem = DecisionProblem {
            criteria: vec![Criterion::new("Cost")],
            judgments: vec![NamedJudgment::new("Cost", "Speed", 3.0)],
            ..DecisionProblem::default()
        };
        assert_eq!(
            DecisionSession::from_problem(&problem),
            Err(AnalysisError::UnknownCriterion("Speed".to_string()))
        );
    }
}
