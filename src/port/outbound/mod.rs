//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! The only driven dependency of the engine is the linear programming oracle.

pub mod solver;
