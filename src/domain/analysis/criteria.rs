//! Criteria - Named, ordered comparison dimensions.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::AnalysisError;
use crate::domain::foundation::ValidationError;

/// A criterion (descriptor) against which alternatives are compared.
///
/// The position of a criterion in its list is its row/column index in the
/// pairwise matrix and its index in every score vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    /// Named states this criterion can take (e.g. "low", "high").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
}

impl Criterion {
    /// Creates a criterion without variants.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
        }
    }

    /// Creates a criterion with variants.
    pub fn with_variants(name: impl Into<String>, variants: Vec<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds a variant. Returns false if it was already present.
    pub fn add_variant(&mut self, variant: impl Into<String>) -> Result<bool, ValidationError> {
        let variant = normalize_name("variant", variant)?;
        if self.variants.contains(&variant) {
            return Ok(false);
        }
        self.variants.push(variant);
        Ok(true)
    }
}

/// Trims a name and rejects it if nothing is left.
pub(crate) fn normalize_name(
    field: &str,
    name: impl Into<String>,
) -> Result<String, ValidationError> {
    let name = name.into();
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

/// Fails on the first empty or repeated name.
pub(crate) fn ensure_unique_names<'a>(
    kind: &'static str,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), AnalysisError> {
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field(kind).into());
        }
        if !seen.insert(name) {
            return Err(AnalysisError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}
