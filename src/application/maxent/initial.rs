//! Strictly interior starting points for the reduced problem.

use nalgebra::{DMatrix, DVector};
use tracing::debug;

use crate::domain::constraint::{Constraint, VariableBounds};
use crate::error::{Error, Result};
use crate::port::outbound::solver::{LpProblem, Solver, SolverOptions};

/// Slack allowed on `A x = b`; also the snap-to-zero threshold.
pub const INITIAL_POINT_TOLERANCE: f64 = 1e-8;

/// Find a point of `{x : A x = b}` whose smallest component is as large as
/// possible.
///
/// Solves `max t` subject to `|A x - b| <= 1e-8` and `x_i >= t` with a single
/// LP. `a` must already be restricted to the nonzero support, and the result
/// is the reduced vector: components below `1e-8` are snapped to 0 and the
/// rest renormalized to sum to one.
///
/// # Errors
///
/// Returns [`Error::InfeasibleInitialPoint`] if the LP is not solved to
/// optimality, [`Error::DimensionMismatch`] if `a` and `b` disagree.
pub fn initial_point(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    solver: &dyn Solver,
    options: &SolverOptions,
) -> Result<DVector<f64>> {
    if a.nrows() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.nrows(),
            found: b.len(),
        });
    }

    let n = a.ncols();
    let mut problem = LpProblem::default();
    let x = problem.add_block("x", n, VariableBounds::free());
    let t = problem.add_block("t", 1, VariableBounds::free());
    problem.set_objective(&t, &[-1.0]);

    for (row, target) in a.row_iter().zip(b.iter()) {
        let coefficients: Vec<f64> = row.iter().copied().collect();
        let full = problem.row(&[(&x, coefficients.as_slice())]);
        problem
            .constraints
            .extend(Constraint::within(full, *target, INITIAL_POINT_TOLERANCE));
    }

    let mut unit = vec![0.0; n];
    for i in 0..n {
        unit[i] = 1.0;
        let row = problem.row(&[(&x, unit.as_slice()), (&t, &[-1.0][..])]);
        problem.constraints.push(Constraint::geq(row, 0.0));
        unit[i] = 0.0;
    }

    let solution = solver.solve_with(&problem, options)?;
    if !solution.is_optimal() {
        return Err(Error::InfeasibleInitialPoint {
            status: solution.status,
        });
    }
    let values = solution.block(&x).ok_or(Error::DimensionMismatch {
        expected: problem.num_vars(),
        found: solution.values.len(),
    })?;

    let slack = solution.block(&t).map_or(f64::NAN, |v| v[0]);
    debug!(n, slack, "Found initial point");

    let mut point = DVector::from_column_slice(values);
    for v in point.iter_mut() {
        if v.abs() < INITIAL_POINT_TOLERANCE {
            *v = 0.0;
        }
    }
    let total = point.sum();
    if total > 0.0 {
        point /= total;
    }
    Ok(point)
}
