//! Report output configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Largest number of decimal places a report may request.
pub const MAX_PRECISION: usize = 12;

/// How reports are rendered
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Report format
    #[serde(default)]
    pub format: OutputFormat,

    /// Decimal places for weights, scores and matrix cells
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Include the reciprocal pairwise matrix in Markdown reports
    #[serde(default = "default_show_matrix")]
    pub show_matrix: bool,
}

/// Report encoding
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Yaml,
    #[default]
    Markdown,
}

impl OutputConfig {
    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.precision > MAX_PRECISION {
            return Err(ValidationError::PrecisionTooLarge(self.precision));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
            show_matrix: default_show_matrix(),
        }
    }
}

fn default_precision() -> usize {
    2
}

fn default_show_matrix() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_defaults() {
        let config = OutputConfig::default();
        assert_eq!(config.format, OutputFormat::Markdown);
        assert_eq!(config.precision, 2);
        assert!(config.show_matrix);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_precision_limit() {
        let config = OutputConfig {
            precision: 13,
            ..OutputConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::PrecisionTooLarge(13))
        );
    }

    #[test]
    fn test_output_config_deserialization() {
        let json = r#"{ "format": "yaml", "precision": 4 }"#;
        let config: OutputConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.format, OutputFormat::Yaml);
        assert_eq!(config.precision, 4);
        assert!(config.show_matrix);
    }
}
