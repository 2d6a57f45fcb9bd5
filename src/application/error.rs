//! Application-level errors.

use thiserror::Error;

use crate::domain::analysis::AnalysisError;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ProblemSourceError;

/// Failures surfaced by command handlers.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Source(#[from] ProblemSourceError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl ApplicationError {
    /// Returns the machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ApplicationError::Source(ProblemSourceError::ParseFailed(_))
            | ApplicationError::Source(ProblemSourceError::UnsupportedFormat(_)) => {
                ErrorCode::InvalidFormat
            }
            ApplicationError::Source(_) => ErrorCode::InternalError,
            ApplicationError::Analysis(err) => err.code(),
        }
    }
}

impl From<ApplicationError> for DomainError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Analysis(inner) => inner.into(),
            other => DomainError::new(other.code(), other.to_string()),
        }
    }
}
