//! Report Renderer Port - Interface for presenting decision reports.
//!
//! Rendering is a presentation concern: the domain produces a
//! `DecisionReport` and renderers turn it into text for a terminal,
//! a file, or another program.

use crate::domain::analysis::DecisionReport;

/// Errors that can occur while rendering a report
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to serialize report: {0}")]
    SerializationFailed(String),
}

/// Port for rendering a report to text
pub trait ReportRenderer: Send + Sync {
    /// Render the report
    ///
    /// # Errors
    /// Returns `RenderError` if the report cannot be encoded
    fn render(&self, report: &DecisionReport) -> Result<String, RenderError>;
}
