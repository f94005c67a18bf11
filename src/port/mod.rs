//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture. The
//! application layer talks to solvers only through these traits, so any
//! backend can be swapped in by the infrastructure factories.
//!
//! # Available Ports
//!
//! - [`Solver`] - LP optimization backend

pub mod outbound;

pub use outbound::solver::{
    LpProblem, LpSolution, SolutionStatus, Solver, SolverOptions, VariableBlock,
};
