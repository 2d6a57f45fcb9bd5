//! Application configuration module
//!
//! This module provides type-safe configuration loading from an optional
//! config file and environment variables using the `config` and `dotenvy`
//! crates. Environment variables use the `AHP_TOPSIS` prefix and nested
//! values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ahp_topsis::config::AppConfig;
//!
//! let config = AppConfig::load(None).expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Rendering reports as {:?}", config.output.format);
//! ```

mod error;
mod logging;
mod output;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use output::{OutputConfig, OutputFormat, MAX_PRECISION};

use serde::Deserialize;
use std::path::Path;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report rendering (format, precision, matrix display)
    #[serde(default)]
    pub output: OutputConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `file` if given (format chosen by extension)
    /// 3. Reads environment variables with `AHP_TOPSIS` prefix, which
    ///    override file values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_TOPSIS__OUTPUT__FORMAT=json` -> `output.format = json`
    /// - `AHP_TOPSIS__OUTPUT__PRECISION=3` -> `output.precision = 3`
    /// - `AHP_TOPSIS__LOGGING__LEVEL=debug` -> `logging.level = debug`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or values cannot be
    /// parsed into expected types.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("AHP_TOPSIS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
