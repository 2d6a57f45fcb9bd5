//! AHP-TOPSIS - Multi-criteria decision support
//!
//! This crate derives criterion weights from pairwise comparisons using the
//! Analytic Hierarchy Process, then ranks alternatives against those weights
//! by their closeness to the ideal solution (TOPSIS).
//!
//! # Layers
//!
//! - `domain` - Judgment scale, pairwise matrix, weight and ranking engines
//! - `ports` - Interfaces for loading problems and rendering reports
//! - `adapters` - File problem source and JSON/YAML/Markdown renderers
//! - `application` - Command handlers orchestrating the engines
//! - `config` - Output and logging configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
