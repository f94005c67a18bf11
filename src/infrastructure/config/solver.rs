//! LP backend configuration.

use serde::{Deserialize, Serialize};

use crate::port::outbound::solver::SolverOptions;

/// Configuration for the LP oracle.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SolverConfig {
    /// Backend name. Only `highs` is available.
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Let the backend print its own log.
    #[serde(default)]
    pub verbose: bool,

    /// Wall-clock limit per LP, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<f64>,

    /// Backend thread count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<u32>,

    /// Primal feasibility tolerance handed to the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primal_feasibility_tolerance: Option<f64>,
}

fn default_backend() -> String {
    "highs".to_string()
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            verbose: false,
            time_limit: None,
            threads: None,
            primal_feasibility_tolerance: None,
        }
    }
}

impl SolverConfig {
    /// Options passed to every LP call.
    #[must_use]
    pub fn options(&self) -> SolverOptions {
        SolverOptions {
            verbose: self.verbose,
            time_limit: self.time_limit,
            threads: self.threads,
            primal_feasibility_tolerance: self.primal_feasibility_tolerance,
            ..SolverOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_carry_every_setting() {
        let config = SolverConfig {
            verbose: true,
            time_limit: Some(30.0),
            threads: Some(2),
            primal_feasibility_tolerance: Some(1e-9),
            ..SolverConfig::default()
        };
        let options = config.options();

        assert!(options.verbose);
        assert_eq!(options.time_limit, Some(30.0));
        assert_eq!(options.threads, Some(2));
        assert_eq!(options.primal_feasibility_tolerance, Some(1e-9));
        assert!(!options.interior_point);
    }
}
