//! Marginal-constrained maximum entropy.
//!
//! - [`zeros`]: outcomes forced to zero by the marginals
//! - [`initial`]: interior starting point for the optimizer
//! - [`feasibility`]: diagnostic check of the constraint system
//! - [`marginal`]: one (distribution, order) maximization
//! - [`driver`]: every order from 0 to `k_max`

pub mod driver;
pub mod feasibility;
pub mod initial;
pub mod marginal;
pub mod zeros;

pub use driver::{marginal_maxent_dists, prepare_dist};
pub use feasibility::{check_feasibility, FeasibilityReport};
pub use initial::initial_point;
pub use marginal::{MarginalMaxent, MaxentSolution};
pub use zeros::{isolate_zeros, IsolatedZeros, ZeroPartition};
