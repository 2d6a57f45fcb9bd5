//! YAML report renderer.

use crate::domain::analysis::DecisionReport;
use crate::ports::{RenderError, ReportRenderer};

/// Renders reports as YAML at full precision.
#[derive(Debug, Clone, Default)]
pub struct YamlReportRenderer;

impl ReportRenderer for YamlReportRenderer {
    fn render(&self, report: &DecisionReport) -> Result<String, RenderError> {
        serde_yaml::to_string(report).map_err(|e| RenderError::SerializationFailed(e.to_string()))
    }
}
