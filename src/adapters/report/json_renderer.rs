//! JSON report renderer.

use crate::domain::analysis::DecisionReport;
use crate::ports::{RenderError, ReportRenderer};

/// Renders reports as pretty-printed JSON at full precision.
#[derive(Debug, Clone, Default)]
pub struct JsonReportRenderer;

impl ReportRenderer for JsonReportRenderer {
    fn render(&self, report: &DecisionReport) -> Result<String, RenderError> {
        serde_json::to_string_pretty(report)
            .map_err(|e| RenderError::SerializationFailed(e.to_string()))
    }
}
