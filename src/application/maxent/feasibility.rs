//! Feasibility diagnostics for marginal constraint systems.
//!
//! Not used by the optimizer. Callers run it to confirm that a (dist, k)
//! pair yields a satisfiable system before paying for the full optimization.

use nalgebra::DVector;
use tracing::debug;

use crate::domain::constraint::{Constraint, VariableBounds};
use crate::domain::distribution::Distribution;
use crate::domain::marginal::marginal_constraints;
use crate::domain::sample_space::Symbol;
use crate::error::{Error, Result};
use crate::port::outbound::solver::{LpProblem, Solver, SolverOptions};

/// Outcome of a successful feasibility check.
#[derive(Debug, Clone)]
pub struct FeasibilityReport {
    /// Smallest achievable `max |A x - b|`.
    pub residual: f64,
    /// A nonnegative full-length vector achieving `residual`.
    pub witness: DVector<f64>,
}

/// Solve the minimum max-residual problem for the `k`-way marginals of `dist`:
///
/// ```text
/// minimize    t
/// subject to  -t <= A x - b <= t
///             x >= 0
/// ```
///
/// The full, unreduced system is used.
///
/// # Errors
///
/// Returns [`Error::InfeasibleConstraintSystem`] if the LP is not solved to
/// optimality, or an error if `dist` is not dense over a Cartesian space.
pub fn check_feasibility<S: Symbol>(
    dist: &Distribution<S>,
    k: usize,
    solver: &dyn Solver,
    options: &SolverOptions,
) -> Result<FeasibilityReport> {
    let (a, b) = marginal_constraints(dist, k)?;

    let mut problem = LpProblem::default();
    let x = problem.add_block("x", a.ncols(), VariableBounds::non_negative());
    let t = problem.add_block("t", 1, VariableBounds::free());
    problem.set_objective(&t, &[1.0]);

    for (row, target) in a.row_iter().zip(b.iter()) {
        let coefficients: Vec<f64> = row.iter().copied().collect();
        // A x - t <= b  and  A x + t >= b
        let upper = problem.row(&[(&x, coefficients.as_slice()), (&t, &[-1.0][..])]);
        let lower = problem.row(&[(&x, coefficients.as_slice()), (&t, &[1.0][..])]);
        problem.constraints.push(Constraint::leq(upper, *target));
        problem.constraints.push(Constraint::geq(lower, *target));
    }

    let solution = solver.solve_with(&problem, options)?;
    if !solution.is_optimal() {
        return Err(Error::InfeasibleConstraintSystem {
            status: solution.status,
        });
    }

    let (Some(witness), Some(residual)) = (solution.block(&x), solution.block(&t)) else {
        return Err(Error::DimensionMismatch {
            expected: problem.num_vars(),
            found: solution.values.len(),
        });
    };
    debug!(k, residual = residual[0], "Checked marginal feasibility");

    Ok(FeasibilityReport {
        residual: residual[0],
        witness: DVector::from_column_slice(witness),
    })
}
