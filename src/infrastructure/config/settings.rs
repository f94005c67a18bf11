//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! section is optional, so an empty file yields the defaults.
//!
//! # Example
//!
//! ```no_run
//! use marginal_maxent::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::maxent::MaxentConfig;
use super::optimizer::OptimizerConfig;
use super::solver::SolverConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Frank-Wolfe tuning.
    #[serde(default)]
    pub optimizer: OptimizerConfig,

    /// LP backend selection and options.
    #[serde(default)]
    pub solver: SolverConfig,

    /// Marginal order range.
    #[serde(default)]
    pub maxent: MaxentConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Render the effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::InvalidValue {
                field: "config",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Check that all values are within acceptable ranges.
    fn validate(&self) -> Result<()> {
        let optimizer = &self.optimizer;
        if optimizer.max_iterations == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_iterations",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        for (field, value) in [
            ("tolerance", optimizer.tolerance),
            ("cleanup_tolerance", optimizer.cleanup_tolerance),
            ("direction_tolerance", optimizer.direction_tolerance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be finite and greater than 0".to_string(),
                }
                .into());
            }
        }

        if self.solver.backend != "highs" {
            return Err(ConfigError::InvalidValue {
                field: "backend",
                reason: format!("unknown backend '{}', expected 'highs'", self.solver.backend),
            }
            .into());
        }
        if let Some(limit) = self.solver.time_limit {
            if !limit.is_finite() || limit <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "time_limit",
                    reason: "must be finite and greater than 0".to_string(),
                }
                .into());
            }
        }
        if let Some(tolerance) = self.solver.primal_feasibility_tolerance {
            if !tolerance.is_finite() || tolerance <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "primal_feasibility_tolerance",
                    reason: "must be finite and greater than 0".to_string(),
                }
                .into());
            }
        }
        if self.solver.threads == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "threads",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("unknown format '{}', expected 'pretty' or 'json'", self.logging.format),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
