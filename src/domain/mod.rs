//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (judgment scale, errors)
//! - `analysis` - Pure domain services for weighting and ranking (AHP, TOPSIS)

pub mod analysis;
pub mod foundation;
