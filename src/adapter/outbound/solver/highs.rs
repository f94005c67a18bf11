//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear programming solver. This
//! implementation wraps it using the good_lp crate for ergonomic Rust usage.
//!
//! A fresh HiGHS model is built for every call and the call's
//! [`SolverOptions`] are applied to that model only, so option overrides end
//! with the call on every path out of it.

use good_lp::solvers::highs::highs;
use good_lp::{constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel};
use tracing::debug;

use crate::domain::constraint::ConstraintSense;
use crate::error::{Error, Result};
use crate::port::outbound::solver::{LpProblem, LpSolution, SolutionStatus, Solver, SolverOptions};

/// HiGHS-based LP solver.
#[derive(Debug, Default, Clone)]
pub struct HiGHSSolver {
    options: SolverOptions,
}

impl HiGHSSolver {
    /// Create a new HiGHS solver instance with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver whose ambient options are `options`.
    #[must_use]
    pub const fn with_options(options: SolverOptions) -> Self {
        Self { options }
    }
}

impl Solver for HiGHSSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn options(&self) -> &SolverOptions {
        &self.options
    }

    fn solve_with(&self, problem: &LpProblem, options: &SolverOptions) -> Result<LpSolution> {
        solve_with_good_lp(problem, options)
    }
}

/// Internal solver implementation using good_lp.
fn solve_with_good_lp(problem: &LpProblem, options: &SolverOptions) -> Result<LpSolution> {
    let n = problem.num_vars();

    // Handle empty problem
    if n == 0 {
        return Ok(LpSolution {
            values: vec![],
            objective: 0.0,
            status: SolutionStatus::Optimal,
        });
    }

    if problem.bounds.len() != n {
        return Err(Error::Solver(format!(
            "{} bounds for {n} variables",
            problem.bounds.len()
        )));
    }
    if let Some(row) = problem
        .constraints
        .iter()
        .find(|c| c.coefficients.len() != n)
    {
        return Err(Error::Solver(format!(
            "constraint row has {} coefficients for {n} variables",
            row.coefficients.len()
        )));
    }

    // Create variables
    let mut vars = variables!();
    let mut var_list = Vec::with_capacity(n);

    for bounds in &problem.bounds {
        let mut v = variable();
        if let Some(lb) = bounds.lower {
            v = v.min(lb);
        }
        if let Some(ub) = bounds.upper {
            v = v.max(ub);
        }
        var_list.push(vars.add(v));
    }

    let linear = |coefficients: &[f64]| -> Expression {
        var_list
            .iter()
            .zip(coefficients)
            .filter(|(_, c)| **c != 0.0)
            .map(|(v, c)| *c * *v)
            .sum()
    };

    let objective = linear(&problem.objective);

    let mut model = vars.minimise(&objective).using(highs);
    model.set_verbose(options.verbose);
    if options.interior_point {
        // Crossover would move the interior solution to a vertex.
        model = model
            .set_option("presolve", "off")
            .set_option("solver", "ipm")
            .set_option("run_crossover", "off");
    }
    if let Some(seconds) = options.time_limit {
        model = model.set_option("time_limit", seconds);
    }
    if let Some(threads) = options.threads {
        model = model.set_option("threads", i32::try_from(threads).unwrap_or(i32::MAX));
    }
    if let Some(tolerance) = options.primal_feasibility_tolerance {
        model = model.set_option("primal_feasibility_tolerance", tolerance);
    }

    // Add constraints
    for constr in &problem.constraints {
        let lhs = linear(&constr.coefficients);
        let rhs = constr.rhs;

        match constr.sense {
            ConstraintSense::GreaterEqual => {
                model = model.with(constraint!(lhs >= rhs));
            }
            ConstraintSense::LessEqual => {
                model = model.with(constraint!(lhs <= rhs));
            }
            ConstraintSense::Equal => {
                model = model.with(constraint!(lhs == rhs));
            }
        }
    }

    // Solve
    match model.solve() {
        Ok(solution) => {
            let values: Vec<f64> = var_list.iter().map(|v| solution.value(*v)).collect();
            let objective = values
                .iter()
                .zip(&problem.objective)
                .map(|(v, c)| v * c)
                .sum();

            Ok(LpSolution {
                values,
                objective,
                status: SolutionStatus::Optimal,
            })
        }
        Err(err) => {
            debug!(error = %err, "HiGHS did not return a solution");
            let status = match err {
                ResolutionError::Infeasible => SolutionStatus::Infeasible,
                ResolutionError::Unbounded => SolutionStatus::Unbounded,
                _ => SolutionStatus::Error,
            };
            Ok(LpSolution::failed(status))
        }
    }
}
