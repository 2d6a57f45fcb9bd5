//! Problem Source Port - Interface for loading decision problems.
//!
//! The domain never reads files itself; adapters such as
//! `FileProblemSource` turn external documents into a `DecisionProblem`.

use std::path::PathBuf;

use crate::domain::analysis::DecisionProblem;

/// Errors that can occur while loading a problem
#[derive(Debug, thiserror::Error)]
pub enum ProblemSourceError {
    #[error("Problem file not found: {0}")]
    NotFound(PathBuf),

    #[error("Unsupported problem format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to parse problem: {0}")]
    ParseFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for loading a decision problem
pub trait ProblemSource: Send + Sync {
    /// Load the problem description
    ///
    /// # Errors
    /// Returns `ProblemSourceError` if the problem cannot be read or parsed
    fn load(&self) -> Result<DecisionProblem, ProblemSourceError>;

    /// Human-readable origin of the problem, used in logs
    fn describe(&self) -> String;
}
