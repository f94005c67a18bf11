//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured components from
//! application configuration.
//!
//! # Submodules
//!
//! - [`solver`] - LP oracle and optimizer construction

pub mod solver;

#[cfg(test)]
mod tests;
