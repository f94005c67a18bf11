//! Marginal-maxent - maximum entropy distributions under marginal constraints.
//!
//! Given a joint distribution over `n` discrete random variables and an order
//! `k`, this crate finds the distribution of greatest Shannon entropy that
//! shares every `k`-way marginal with the input. Computing it for each
//! `k = 0..=n` decomposes the structure of the input by interaction order.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Distributions, sample spaces and the marginal constraint
//!   systems `A x = b` built from them
//! - **`port`** - The LP oracle trait ([`port::Solver`])
//! - **`adapter`** - The HiGHS backend (via `good_lp`) and the CLI
//! - **`application`** - Frank-Wolfe, zero isolation and the multi-order
//!   driver
//! - **`infrastructure`** - Configuration, logging and component factories
//!
//! # Example
//!
//! ```no_run
//! use marginal_maxent::adapter::outbound::solver::HiGHSSolver;
//! use marginal_maxent::application::maxent::{marginal_maxent_dists, MarginalMaxent};
//! use marginal_maxent::domain::Distribution;
//!
//! # fn main() -> marginal_maxent::error::Result<()> {
//! let xor = Distribution::new(
//!     vec![vec![0, 0, 0], vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]],
//!     vec![0.25; 4],
//! )?;
//! let dists = marginal_maxent_dists(&xor, None, &MarginalMaxent::default(), &HiGHSSolver::new())?;
//! for (k, dist) in dists.iter().enumerate() {
//!     println!("k = {k}: {:.3} bits", dist.entropy());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
