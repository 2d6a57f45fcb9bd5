//! Adapters - Implementations of port interfaces.
//!
//! - `problem` - Problem sources (JSON/YAML files)
//! - `report` - Report renderers (JSON, YAML, Markdown)

pub mod problem;
pub mod report;

pub use problem::{FileProblemSource, ProblemFormat};
pub use report::{
    renderer_for, JsonReportRenderer, MarkdownReportRenderer, YamlReportRenderer,
};
