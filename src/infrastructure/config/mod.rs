//! Infrastructure configuration modules.

pub mod logging;
pub mod maxent;
pub mod optimizer;
pub mod settings;
pub mod solver;

pub use settings::Config;
