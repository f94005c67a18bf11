//! Solver port for linear programming.
//!
//! Defines the LP oracle consumed by the maximum entropy engine. The engine
//! only ever needs to minimize a linear objective over linear constraints;
//! every call is blocking and independent of every other call.
//!
//! # Overview
//!
//! - [`Solver`]: Core LP solver interface
//! - [`SolverOptions`]: Per-call solver settings
//! - [`LpProblem`]: Problem definition with named [`VariableBlock`]s
//! - [`LpSolution`]: Solution representation

use serde::{Deserialize, Serialize};

use crate::domain::constraint::{Constraint, VariableBounds};
use crate::error::Result;

/// Linear programming solver.
///
/// Implementations wrap specific solver backends (HiGHS, Clarabel, etc.) and
/// provide a unified interface for optimization problems.
///
/// # Options
///
/// Options are never global: each call receives the [`SolverOptions`] it
/// runs with. [`Solver::options`] holds the backend's ambient defaults, which
/// callers copy and adjust for a single call. Nothing a call does can change
/// the options seen by later calls.
///
/// # Implementation Notes
///
/// - Return a non-optimal [`SolutionStatus`] for infeasible or unbounded
///   problems rather than an error; errors are reserved for malformed input
/// - Values may be empty when the status is not optimal
pub trait Solver: Send + Sync {
    /// Return the solver name for logging and configuration.
    fn name(&self) -> &'static str;

    /// Ambient options used by [`Solver::solve_lp`].
    fn options(&self) -> &SolverOptions;

    /// Solve a linear programming problem with explicit options.
    ///
    /// Minimizes `c^T x` subject to the constraints and bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the problem is malformed (for example constraint
    /// rows whose width differs from the number of variables).
    fn solve_with(&self, problem: &LpProblem, options: &SolverOptions) -> Result<LpSolution>;

    /// Solve a linear programming problem with the ambient options.
    ///
    /// # Errors
    ///
    /// See [`Solver::solve_with`].
    fn solve_lp(&self, problem: &LpProblem) -> Result<LpSolution> {
        self.solve_with(problem, self.options())
    }
}

/// Settings applied to a single solve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    /// Let the backend print its own progress output.
    pub verbose: bool,
    /// Wall-clock limit in seconds.
    pub time_limit: Option<f64>,
    /// Worker threads the backend may use.
    pub threads: Option<u32>,
    /// Primal feasibility tolerance passed to the backend.
    pub primal_feasibility_tolerance: Option<f64>,
    /// Solve with an interior-point method and report the point it stops at,
    /// without moving it to a vertex of the optimal face.
    pub interior_point: bool,
}

impl SolverOptions {
    /// Copy of these options with backend output suppressed.
    #[must_use]
    pub fn quiet(&self) -> Self {
        Self {
            verbose: false,
            ..self.clone()
        }
    }

    /// Copy of these options that asks for an interior-point solution.
    ///
    /// On a degenerate optimum the reported point then lies inside the
    /// optimal face, with small positive values where a vertex has zeros.
    #[must_use]
    pub fn interior(&self) -> Self {
        Self {
            interior_point: true,
            ..self.clone()
        }
    }
}

/// Handle to a contiguous, named group of LP variables.
///
/// Handles are returned by [`LpProblem::add_block`] and are the only way to
/// read values back out of an [`LpSolution`], so callers never depend on the
/// order in which a backend reports variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableBlock {
    name: &'static str,
    offset: usize,
    len: usize,
}

impl VariableBlock {
    /// Name given when the block was added.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Index of the first variable.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Number of variables in the block.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if the block has no variables.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Range of variable indices covered by the block.
    #[must_use]
    pub const fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.len
    }
}

/// Linear programming problem definition.
///
/// Represents a minimization problem of the form:
///
/// ```text
/// minimize    c^T * x
/// subject to  constraints
///             bounds on x
/// ```
#[derive(Debug, Clone, Default)]
pub struct LpProblem {
    /// Objective function coefficients.
    ///
    /// The solver minimizes `c^T * x` where `c` is this vector.
    pub objective: Vec<f64>,

    /// Linear constraints on the variables.
    pub constraints: Vec<Constraint>,

    /// Lower and upper bounds for each variable.
    pub bounds: Vec<VariableBounds>,

    blocks: Vec<VariableBlock>,
}

impl LpProblem {
    /// Create a problem with a single block `x` of non-negative variables.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        let mut problem = Self::default();
        problem.add_block("x", num_vars, VariableBounds::non_negative());
        problem
    }

    /// Append a block of `len` variables sharing the same bounds.
    ///
    /// Existing constraint rows are widened with zero coefficients.
    pub fn add_block(
        &mut self,
        name: &'static str,
        len: usize,
        bounds: VariableBounds,
    ) -> VariableBlock {
        let block = VariableBlock {
            name,
            offset: self.num_vars(),
            len,
        };
        self.objective.resize(block.offset + len, 0.0);
        self.bounds.resize(block.offset + len, bounds);
        for constraint in &mut self.constraints {
            constraint.coefficients.resize(block.offset + len, 0.0);
        }
        self.blocks.push(block);
        block
    }

    /// Return the number of decision variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    /// Blocks in the order they were added.
    #[must_use]
    pub fn blocks(&self) -> &[VariableBlock] {
        &self.blocks
    }

    /// Look up a block by name.
    #[must_use]
    pub fn block(&self, name: &str) -> Option<VariableBlock> {
        self.blocks.iter().find(|b| b.name == name).copied()
    }

    /// Set the objective coefficients of one block.
    pub fn set_objective(&mut self, block: &VariableBlock, coefficients: &[f64]) {
        for (slot, c) in self.objective[block.range()].iter_mut().zip(coefficients) {
            *slot = *c;
        }
    }

    /// Full-width coefficient row from per-block coefficients.
    #[must_use]
    pub fn row(&self, terms: &[(&VariableBlock, &[f64])]) -> Vec<f64> {
        let mut row = vec![0.0; self.num_vars()];
        for (block, coefficients) in terms {
            for (slot, c) in row[block.range()].iter_mut().zip(coefficients.iter()) {
                *slot = *c;
            }
        }
        row
    }
}

/// Solution to a linear programming problem.
#[derive(Debug, Clone, PartialEq)]
pub struct LpSolution {
    /// Values for each decision variable; empty when the backend produced none.
    pub values: Vec<f64>,

    /// Objective function value at `values`.
    pub objective: f64,

    /// Termination status of the solver.
    pub status: SolutionStatus,
}

impl LpSolution {
    /// Solution without values, for failed solves.
    #[must_use]
    pub const fn failed(status: SolutionStatus) -> Self {
        Self {
            values: Vec::new(),
            objective: f64::NAN,
            status,
        }
    }

    /// Return `true` if the solver found an optimal solution.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    /// Values of one block, if the solution carries values for it.
    #[must_use]
    pub fn block(&self, block: &VariableBlock) -> Option<&[f64]> {
        self.values.get(block.range())
    }
}

/// Termination status of an optimization solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolutionStatus {
    /// Solver found a globally optimal solution.
    Optimal,

    /// No feasible solution exists.
    Infeasible,

    /// Objective function is unbounded.
    Unbounded,

    /// Solver encountered an internal error.
    Error,
}
