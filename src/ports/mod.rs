//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProblemSource` - Loads a decision problem (criteria, judgments, alternatives)
//! - `ReportRenderer` - Presents computed weights and rankings

mod problem_source;
mod report_renderer;

pub use problem_source::{ProblemSource, ProblemSourceError};
pub use report_renderer::{RenderError, ReportRenderer};
