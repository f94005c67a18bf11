//! Convex optimization over marginal polytopes.

pub mod entropy;
pub mod frank_wolfe;

pub use frank_wolfe::{FrankWolfe, FrankWolfeConfig, FrankWolfeResult};
