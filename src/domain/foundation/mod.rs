//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of
//! the weighting and ranking domain.

mod errors;
mod judgment_value;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use judgment_value::{deserialize_judgment, parse_judgment, JudgmentValue};
