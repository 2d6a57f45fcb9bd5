//! Problem source adapters.

mod file_problem_source;

pub use file_problem_source::{FileProblemSource, ProblemFormat};
