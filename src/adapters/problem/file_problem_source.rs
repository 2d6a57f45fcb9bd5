//! File-based Problem Source Adapter
//!
//! Reads a decision problem from a JSON or YAML file. The format is chosen
//! by file extension (`.json`, `.yaml`, `.yml`).

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::analysis::DecisionProblem;
use crate::ports::{ProblemSource, ProblemSourceError};

/// Problem file encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemFormat {
    Json,
    Yaml,
}

impl ProblemFormat {
    /// Detects the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self, ProblemSourceError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(ProblemFormat::Json),
            Some("yaml") | Some("yml") => Ok(ProblemFormat::Yaml),
            Some(other) => Err(ProblemSourceError::UnsupportedFormat(other.to_string())),
            None => Err(ProblemSourceError::UnsupportedFormat(
                "missing file extension".to_string(),
            )),
        }
    }

    /// Parses problem text in this format
    pub fn parse(&self, content: &str) -> Result<DecisionProblem, ProblemSourceError> {
        match self {
            ProblemFormat::Json => serde_json::from_str(content)
                .map_err(|e| ProblemSourceError::ParseFailed(e.to_string())),
            ProblemFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| ProblemSourceError::ParseFailed(e.to_string())),
        }
    }
}

/// Problem source backed by a single file
#[derive(Debug, Clone)]
pub struct FileProblemSource {
    path: PathBuf,
}

impl FileProblemSource {
    /// Create a source for the file at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProblemSource for FileProblemSource {
    fn load(&self) -> Result<DecisionProblem, ProblemSourceError> {
        let format = ProblemFormat::from_path(&self.path)?;

        if !self.path.exists() {
            return Err(ProblemSourceError::NotFound(self.path.clone()));
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| ProblemSourceError::IoError(e.to_string()))?;

        let problem = format.parse(&content)?;
        debug!(
            path = %self.path.display(),
            criteria = problem.criteria.len(),
            alternatives = problem.alternatives.len(),
            "Loaded problem file"
        );
        Ok(problem)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
