//! Solver factory.
//!
//! Provides factory functions for constructing the LP oracle and the entropy
//! optimizer from configuration.

use std::sync::Arc;

use crate::adapter::outbound::solver::highs::HiGHSSolver;
use crate::application::maxent::marginal::MarginalMaxent;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::optimizer::OptimizerConfig;
use crate::infrastructure::config::solver::SolverConfig;
use crate::port::outbound::solver::Solver;

/// Build the LP oracle named by `config.backend`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for an unknown backend.
pub fn build_solver(config: &SolverConfig) -> Result<Arc<dyn Solver>> {
    match config.backend.as_str() {
        "highs" => Ok(Arc::new(HiGHSSolver::with_options(config.options()))),
        other => Err(ConfigError::InvalidValue {
            field: "backend",
            reason: format!("unknown backend '{other}'"),
        }
        .into()),
    }
}

/// Build the marginal maxent optimizer.
#[must_use]
pub fn build_maxent(config: &OptimizerConfig) -> MarginalMaxent {
    MarginalMaxent::new(config.to_core_config())
}
