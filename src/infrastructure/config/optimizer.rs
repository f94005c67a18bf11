//! Frank-Wolfe optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::application::solver::frank_wolfe::FrankWolfeConfig;

/// Configuration for the entropy optimizer.
///
/// Mirrors [`FrankWolfeConfig`]; every field may be omitted.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OptimizerConfig {
    /// Iteration budget per marginal order. Defaults to 1000.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Step-size convergence tolerance. Defaults to 1e-3.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Components below this are zeroed in the final distribution.
    /// Defaults to 1e-3.
    #[serde(default = "default_tolerance")]
    pub cleanup_tolerance: f64,

    /// Constraint slack in the direction-finding LP. Defaults to 1e-7.
    #[serde(default = "default_direction_tolerance")]
    pub direction_tolerance: f64,

    /// Log optimizer progress. Defaults to false.
    #[serde(default)]
    pub verbose: bool,
}

fn default_max_iterations() -> usize {
    1000
}

fn default_tolerance() -> f64 {
    1e-3
}

fn default_direction_tolerance() -> f64 {
    1e-7
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
            cleanup_tolerance: default_tolerance(),
            direction_tolerance: default_direction_tolerance(),
            verbose: false,
        }
    }
}

impl OptimizerConfig {
    /// Convert to the optimizer's own configuration type.
    #[must_use]
    pub fn to_core_config(&self) -> FrankWolfeConfig {
        FrankWolfeConfig {
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
            cleanup_tolerance: self.cleanup_tolerance,
            direction_tolerance: self.direction_tolerance,
            verbose: self.verbose,
        }
    }
}
