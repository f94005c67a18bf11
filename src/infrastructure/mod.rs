//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! domain logic.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading and validation
//! - [`factory`] - Component factory functions

pub mod config;
pub mod factory;
