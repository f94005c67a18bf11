//! Solver implementations for linear programming.
//!
//! Implements the `port::outbound::solver::Solver` trait with concrete backends.

pub mod highs;

pub use highs::HiGHSSolver;
