//! Distributions, sample spaces and the linear systems built from them.

pub mod constraint;
pub mod counts;
pub mod distribution;
pub mod error;
pub mod marginal;
pub mod sample_space;
pub mod structure;

pub use constraint::{Constraint, ConstraintSense, VariableBounds};
pub use counts::distribution_from_data;
pub use distribution::Distribution;
pub use error::DistributionError;
pub use marginal::marginal_constraints;
pub use sample_space::{CartesianProduct, Outcome, SampleSpace, Symbol};
pub use structure::{combinations, DenseStructure, SubsetCache};
