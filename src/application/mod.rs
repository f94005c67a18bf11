//! Application services (use cases).
//!
//! These services combine the domain's linear systems with an LP oracle to
//! compute maximum entropy distributions.

pub mod maxent;
pub mod solver;
