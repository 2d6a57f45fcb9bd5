//! Analysis error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, JudgmentValue, ValidationError};

/// Errors raised while validating weighting and ranking input.
///
/// All variants are local validation failures: nothing here is transient
/// and nothing should be retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("No judgment for criteria pair ({row}, {col}); {missing} pair(s) missing in total")]
    IncompleteJudgmentSet {
        row: usize,
        col: usize,
        missing: usize,
    },

    #[error(
        "Judgment for criteria pair ({row}, {col}) is {value}, outside the scale [{min:.4}, {max}]",
        min = JudgmentValue::MIN,
        max = JudgmentValue::MAX
    )]
    ValueOutOfRange { row: usize, col: usize, value: f64 },

    #[error("Alternative '{alternative}' has {actual} score(s), expected {expected}")]
    DimensionMismatch {
        alternative: String,
        expected: usize,
        actual: usize,
    },

    #[error("No {0} supplied")]
    EmptyInput(&'static str),

    #[error("Judgment pair ({row}, {col}) is not an upper-triangle pair of a {size}x{size} matrix")]
    InvalidJudgmentPair { row: usize, col: usize, size: usize },

    #[error("Duplicate {kind} name '{name}'")]
    DuplicateName { kind: &'static str, name: String },

    #[error("Unknown criterion '{0}'")]
    UnknownCriterion(String),

    #[error("Invalid weight vector: {0}")]
    InvalidWeights(String),

    #[error("Alternative '{alternative}' has a non-finite score for criterion {criterion}")]
    NonFiniteScore { alternative: String, criterion: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AnalysisError {
    /// Returns the machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::IncompleteJudgmentSet { .. } => ErrorCode::IncompleteJudgmentSet,
            AnalysisError::ValueOutOfRange { .. } => ErrorCode::OutOfRange,
            AnalysisError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
            AnalysisError::EmptyInput(_) => ErrorCode::EmptyInput,
            AnalysisError::InvalidJudgmentPair { .. } => ErrorCode::InvalidJudgmentPair,
            AnalysisError::DuplicateName { .. } => ErrorCode::DuplicateName,
            AnalysisError::UnknownCriterion(_) => ErrorCode::UnknownCriterion,
            AnalysisError::InvalidWeights(_) => ErrorCode::InvalidWeights,
            AnalysisError::NonFiniteScore { .. } => ErrorCode::NonFiniteScore,
            AnalysisError::Validation(err) => err.code(),
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Validation(inner) => inner.into(),
            other => DomainError::new(other.code(), other.to_string()),
        }
    }
}
