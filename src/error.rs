use thiserror::Error;

use crate::domain::error::DistributionError;
use crate::port::outbound::solver::SolutionStatus;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Distribution(#[from] DistributionError),

    #[error("could not find a valid initial point: solver reported {status:?}")]
    InfeasibleInitialPoint { status: SolutionStatus },

    #[error("marginal constraint system is infeasible: solver reported {status:?}")]
    InfeasibleConstraintSystem { status: SolutionStatus },

    #[error("marginal order {k} exceeds {n_variables} variables")]
    InvalidOrder { k: usize, n_variables: usize },

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("solver error: {0}")]
    Solver(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
