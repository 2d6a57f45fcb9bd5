//! Decision Problem - Serializable description of a weighting/ranking task.

use serde::{Deserialize, Serialize};

use super::{Alternative, Criterion};
use crate::domain::foundation::deserialize_judgment;

/// "Criterion `first` is `value` times as important as criterion `second`."
///
/// `value` is a number or a fraction string such as `"1/3"`. It is checked
/// against the 1/9..9 scale when applied to a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedJudgment {
    pub first: String,
    pub second: String,
    #[serde(deserialize_with = "deserialize_judgment")]
    pub value: f64,
}

impl NamedJudgment {
    pub fn new(first: impl Into<String>, second: impl Into<String>, value: f64) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            value,
        }
    }
}

/// Everything needed to weight criteria and rank alternatives.
///
/// This is the input shape read from problem files; it is turned into a
/// [`DecisionSession`](super::DecisionSession) before any computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionProblem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub criteria: Vec<Criterion>,
    #[serde(default)]
    pub judgments: Vec<NamedJudgment>,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
    /// Treat every pair without a judgment as equally important.
    #[serde(default)]
    pub fill_missing_with_indifference: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_problem() {
        let json = r#"{ "criteria": [{ "name": "Cost" }] }"#;
        let problem: DecisionProblem = serde_json::from_str(json).unwrap();

        assert_eq!(problem.criteria, vec![Criterion::new("Cost")]);
        assert!(problem.judgments.is_empty());
        assert!(problem.alternatives.is_empty());
        assert!(!problem.fill_missing_with_indifference);
    }

    #[test]
    fn deserializes_yaml_with_fraction_judgments() {
        let yaml = r#"
title: Vendor selection
criteria:
  - name: Cost
    variants: [low, high]
  - name: Quality
judgments:
  - { first: Quality, second: Cost, value: "1/3" }
alternatives:
  - { name: Vendor A, scores: [0.7, 0.8] }
"#;
        let problem: DecisionProblem = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(problem.title.as_deref(), Some("Vendor selection"));
        assert_eq!(problem.criteria[0].variants, vec!["low", "high"]);
        assert!((problem.judgments[0].value - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(problem.alternatives[0].scores, vec![0.7, 0.8]);
    }

    #[test]
    fn keeps_off_scale_judgment_for_session_to_reject() {
        let json = r#"{
            "criteria": [{ "name": "A" }, { "name": "B" }],
            "judgments": [{ "first": "A", "second": "B", "value": 11 }]
        }"#;
        let problem: DecisionProblem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.judgments[0].value, 11.0);
    }

    #[test]
    fn rejects_unparseable_judgment() {
        let json = r#"{
            "criteria": [{ "name": "A" }, { "name": "B" }],
            "judgments": [{ "first": "A", "second": "B", "value": "a lot" }]
        }"#;
        assert!(serde_json::from_str::<DecisionProblem>(json).is_err());
    }
}
