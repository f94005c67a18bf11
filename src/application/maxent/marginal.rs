//! Maximum entropy distribution sharing the k-way marginals of a source.

use nalgebra::DVector;
use tracing::debug;

use super::initial::initial_point;
use super::zeros::{isolate_zeros, ZeroPartition};
use crate::application::solver::entropy::{negentropy, negentropy_gradient};
use crate::application::solver::frank_wolfe::{FrankWolfe, FrankWolfeConfig};
use crate::domain::distribution::Distribution;
use crate::domain::marginal::marginal_constraints;
use crate::domain::sample_space::Symbol;
use crate::error::Result;
use crate::port::outbound::solver::Solver;

/// Result of one marginal-constrained entropy maximization.
#[derive(Debug, Clone)]
pub struct MaxentSolution {
    /// Full-length pmf in the canonical order of the sample space.
    pub pmf: DVector<f64>,
    /// Negative entropy (bits) of the final iterate.
    pub objective: f64,
    /// Which indices were forced to zero.
    pub partition: ZeroPartition,
    /// Frank-Wolfe iterations performed.
    pub iterations: usize,
    /// Whether the step-size tolerance was reached.
    pub converged: bool,
}

impl MaxentSolution {
    /// Shannon entropy of the solution, in bits.
    #[must_use]
    pub fn entropy(&self) -> f64 {
        -self.objective
    }
}

/// Maximum entropy solver for marginal constraints.
#[derive(Debug, Clone, Default)]
pub struct MarginalMaxent {
    optimizer: FrankWolfe,
}

impl MarginalMaxent {
    #[must_use]
    pub const fn new(config: FrankWolfeConfig) -> Self {
        Self {
            optimizer: FrankWolfe::new(config),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &FrankWolfeConfig {
        self.optimizer.config()
    }

    /// Find the maximum entropy distribution whose `k`-way marginals match
    /// those of `dist`.
    ///
    /// Forced-zero outcomes are removed before optimizing and come back as
    /// exact zeros in the returned pmf. The starting point search runs with
    /// the solver's options but quiet. Direction LPs ask for interior-point
    /// solutions: a vertex direction would leave exact zeros in the iterate,
    /// and the entropy gradient of a zero component never pulls mass back.
    ///
    /// # Errors
    ///
    /// Returns an error if `dist` is not dense over a Cartesian sample space,
    /// or [`crate::error::Error::InfeasibleInitialPoint`] when no starting
    /// point exists.
    pub fn solve<S: Symbol>(
        &self,
        dist: &Distribution<S>,
        k: usize,
        solver: &dyn Solver,
    ) -> Result<MaxentSolution> {
        let isolated = isolate_zeros(dist, k)?;
        let partition = isolated.partition;

        let (a, b) = marginal_constraints(dist, k)?;
        let a_small = a.select_columns(&partition.nonzero);

        let initial = initial_point(&a_small, &b, solver, &solver.options().quiet())?;
        let result = self.optimizer.minimize(
            negentropy,
            negentropy_gradient,
            &a_small,
            &b,
            initial,
            solver,
            &solver.options().interior(),
        )?;
        debug!(
            k,
            iterations = result.iterations,
            converged = result.converged,
            objective = result.objective,
            "Solved marginal maxent"
        );

        let pmf = partition.expand(&result.x)?;
        Ok(MaxentSolution {
            pmf,
            objective: result.objective,
            partition,
            iterations: result.iterations,
            converged: result.converged,
        })
    }
}
