//! Frank-Wolfe algorithm over linear-equality polytopes.
//!
//! The Frank-Wolfe (conditional gradient) algorithm solves:
//!
//! ```text
//! min_{x in P} f(x),   P = { x >= 0, A x = b }
//! ```
//!
//! for a convex, differentiable `f`. Instead of projecting onto `P`, each
//! iteration asks a linear minimization oracle (an LP) for the point of `P`
//! best aligned with the negative gradient and moves part of the way there.
//! Every iterate is a convex combination of feasible points, so it stays
//! feasible without any projection.

use nalgebra::{DMatrix, DVector};
use tracing::{info, trace, warn};

use crate::domain::constraint::{Constraint, VariableBounds};
use crate::error::{Error, Result};
use crate::port::outbound::solver::{LpProblem, Solver, SolverOptions, VariableBlock};

/// Configuration for the Frank-Wolfe algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct FrankWolfeConfig {
    /// Maximum number of iterations before terminating.
    pub max_iterations: usize,
    /// Stop once an update moves the iterate less than this (Euclidean norm).
    pub tolerance: f64,
    /// Components below this are zeroed before the final renormalization.
    pub cleanup_tolerance: f64,
    /// Slack allowed on `A x = b` in the direction-finding LP.
    pub direction_tolerance: f64,
    /// Log progress ten times over the iteration budget.
    pub verbose: bool,
}

impl Default for FrankWolfeConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-3,
            cleanup_tolerance: 1e-3,
            direction_tolerance: 1e-7,
            verbose: false,
        }
    }
}

/// Frank-Wolfe minimizer.
///
/// Holds only configuration; the polytope, objective and oracle are supplied
/// per call.
#[derive(Debug, Clone, Default)]
pub struct FrankWolfe {
    /// Algorithm configuration.
    config: FrankWolfeConfig,
}

impl FrankWolfe {
    /// Create a new Frank-Wolfe instance with the given configuration.
    #[must_use]
    pub const fn new(config: FrankWolfeConfig) -> Self {
        Self { config }
    }

    /// Return the current configuration.
    #[must_use]
    pub const fn config(&self) -> &FrankWolfeConfig {
        &self.config
    }

    /// Minimize `objective` over `{x >= 0, A x = b}` starting from `initial`.
    ///
    /// `initial` must already be feasible. Iteration `i` solves one LP for
    /// the direction `xbar = argmin grad(x) . xbar` and updates
    /// `x <- (i x + 2 xbar) / (i + 2)`, i.e. a step of `2 / (i + 2)`. The loop
    /// stops when an update moves `x` by less than the tolerance or when the
    /// iteration budget runs out; neither outcome is an error.
    ///
    /// The returned vector has components below the cleanup tolerance zeroed
    /// and is renormalized to sum to one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] when `A`, `b` and `initial`
    /// disagree, and propagates errors raised by the solver itself. A
    /// direction LP that merely fails to reach optimality is logged and
    /// tolerated.
    pub fn minimize<F, G>(
        &self,
        objective: F,
        gradient: G,
        a: &DMatrix<f64>,
        b: &DVector<f64>,
        initial: DVector<f64>,
        solver: &dyn Solver,
        options: &SolverOptions,
    ) -> Result<FrankWolfeResult>
    where
        F: Fn(&DVector<f64>) -> f64,
        G: Fn(&DVector<f64>) -> DVector<f64>,
    {
        let n = initial.len();
        if a.ncols() != n {
            return Err(Error::DimensionMismatch {
                expected: a.ncols(),
                found: n,
            });
        }
        if a.nrows() != b.len() {
            return Err(Error::DimensionMismatch {
                expected: a.nrows(),
                found: b.len(),
            });
        }

        if n == 0 {
            return Ok(FrankWolfeResult {
                objective: objective(&initial),
                x: initial,
                iterations: 0,
                converged: true,
                xdiff: 0.0,
            });
        }

        let (mut problem, xbar_block) = direction_problem(a, b, self.config.direction_tolerance);
        let max_iterations = self.config.max_iterations;
        let progress_every = (max_iterations / 10).max(1);

        let mut x = initial;
        let mut xdiff = 0.0;
        let mut iterations = 0;
        let mut converged = false;

        for i in 0..max_iterations {
            iterations = i + 1;

            let obj = objective(&x);
            let grad = gradient(&x);

            // Direction finding: the point of P minimizing the linearization.
            problem.set_objective(&xbar_block, grad.as_slice());
            let solution = solver.solve_with(&problem, options)?;
            if !solution.is_optimal() {
                warn!(
                    iteration = i,
                    status = ?solution.status,
                    "Did not find optimal direction"
                );
            }
            let Some(xbar) = solution.block(&xbar_block).map(DVector::from_column_slice) else {
                continue;
            };

            // Optimality gap, for progress reporting only.
            let gap = grad.dot(&(&xbar - &x));

            if self.config.verbose && i % progress_every == 0 {
                info!(
                    iteration = i,
                    objective = obj,
                    gap,
                    xdiff,
                    "Frank-Wolfe progress"
                );
            }

            let step = i as f64;
            let x_new = (&x * step + &xbar * 2.0) / (step + 2.0);
            xdiff = (&x_new - &x).norm();
            x = x_new;
            trace!(iteration = i, xdiff, "Frank-Wolfe step");

            if xdiff < self.config.tolerance {
                converged = true;
                break;
            }
        }

        if !converged {
            warn!(
                xdiff,
                iterations = max_iterations,
                desired = self.config.tolerance,
                "Frank-Wolfe only partially converged"
            );
        }

        let objective = objective(&x);
        let x = cleanup(x, self.config.cleanup_tolerance);

        Ok(FrankWolfeResult {
            x,
            objective,
            iterations,
            converged,
            xdiff,
        })
    }
}

/// Direction-finding LP template: `xbar >= 0`, `|A xbar - b| <= tolerance`.
///
/// Only the objective changes between iterations.
fn direction_problem(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    tolerance: f64,
) -> (LpProblem, VariableBlock) {
    let mut problem = LpProblem::default();
    let xbar = problem.add_block("xbar", a.ncols(), VariableBounds::non_negative());
    for (row, target) in a.row_iter().zip(b.iter()) {
        let coefficients: Vec<f64> = row.iter().copied().collect();
        problem
            .constraints
            .extend(Constraint::within(coefficients, *target, tolerance));
    }
    (problem, xbar)
}

/// Zero components below `threshold` and renormalize to unit sum.
///
/// If nothing would survive the threshold, the iterate is only renormalized.
fn cleanup(x: DVector<f64>, threshold: f64) -> DVector<f64> {
    let mut cleaned = x.map(|v| if v.abs() < threshold { 0.0 } else { v });
    let total = cleaned.sum();
    if total > 0.0 {
        cleaned /= total;
        return cleaned;
    }

    warn!(threshold, "Cleanup would remove all mass; keeping raw iterate");
    let total = x.sum();
    if total > 0.0 {
        x / total
    } else {
        x
    }
}

/// Result of a Frank-Wolfe minimization.
#[derive(Debug, Clone)]
pub struct FrankWolfeResult {
    /// Optimized vector after cleanup and renormalization.
    pub x: DVector<f64>,
    /// Objective value at the final iterate, before cleanup.
    pub objective: f64,
    /// Number of iterations executed.
    pub iterations: usize,
    /// Whether the step size fell below the tolerance.
    pub converged: bool,
    /// Norm of the last update.
    pub xdiff: f64,
}
