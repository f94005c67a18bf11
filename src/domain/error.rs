//! Validation errors for distributions and their sample spaces.
//!
//! These errors are returned by the validating constructors on
//! [`Distribution`](super::distribution::Distribution) and by the structural
//! queries that require a dense Cartesian layout.
//!
//! # Examples
//!
//! ```
//! use marginal_maxent::domain::error::DistributionError;
//! use marginal_maxent::domain::Distribution;
//!
//! let result = Distribution::<u8>::new(vec![], vec![]);
//! assert!(matches!(result, Err(DistributionError::EmptyOutcomes)));
//! ```

use thiserror::Error;

/// Errors that occur when distribution invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// A distribution needs at least one outcome.
    #[error("outcomes cannot be empty")]
    EmptyOutcomes,

    /// Every outcome needs exactly one probability mass.
    #[error("{outcomes} outcomes but {pmf} probabilities")]
    LengthMismatch {
        /// Number of outcomes provided.
        outcomes: usize,
        /// Number of masses provided.
        pmf: usize,
    },

    /// All outcomes must have the same number of variables.
    #[error("outcome has {found} symbols, expected {expected}")]
    InconsistentOutcomeLength {
        /// Length of the first outcome.
        expected: usize,
        /// Length of the offending outcome.
        found: usize,
    },

    /// Outcomes must be unique.
    #[error("duplicate outcome {0}")]
    DuplicateOutcome(String),

    /// Masses must be finite and nonnegative.
    #[error("invalid probability {mass} at index {index}")]
    InvalidMass {
        /// Position of the mass.
        index: usize,
        /// The rejected value.
        mass: f64,
    },

    /// Masses must sum to one.
    #[error("probabilities sum to {total}, expected 1")]
    NotNormalized {
        /// Observed total mass.
        total: f64,
    },

    /// An outcome is not part of the declared sample space.
    #[error("outcome {0} is not in the sample space")]
    OutsideSampleSpace(String),

    /// The operation needs a Cartesian product sample space.
    #[error("sample space is not a Cartesian product")]
    NotCartesian,

    /// The operation needs a dense distribution.
    #[error("distribution is not dense")]
    NotDense,

    /// A variable index exceeded the outcome length.
    #[error("variable {index} out of range for {n_variables} variables")]
    InvalidVariable {
        /// The requested variable.
        index: usize,
        /// Number of variables in the distribution.
        n_variables: usize,
    },

    /// Frequency estimation needs at least one full window.
    #[error("cannot take windows of length {length} from {available} symbols")]
    InsufficientData {
        /// Requested window length.
        length: usize,
        /// Number of symbols provided.
        available: usize,
    },
}
