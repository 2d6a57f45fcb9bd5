//! Report renderer adapters.

mod json_renderer;
mod markdown_renderer;
mod yaml_renderer;

pub use json_renderer::JsonReportRenderer;
pub use markdown_renderer::MarkdownReportRenderer;
pub use yaml_renderer::YamlReportRenderer;

use crate::config::{OutputConfig, OutputFormat};
use crate::ports::ReportRenderer;

/// Builds the renderer selected by configuration.
pub fn renderer_for(output: &OutputConfig) -> Box<dyn ReportRenderer> {
    match output.format {
        OutputFormat::Json => Box::new(JsonReportRenderer),
        OutputFormat::Yaml => Box::new(YamlReportRenderer),
        OutputFormat::Markdown => Box::new(
            MarkdownReportRenderer::new(output.precision).with_matrix(output.show_matrix),
        ),
    }
}
