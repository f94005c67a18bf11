//! Command-line interface definitions.
//!
//! Defines the CLI structure for the marginal-maxent binary using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Maximum entropy decomposition of joint distributions by marginal order
#[derive(Parser, Debug)]
#[command(name = "marginal-maxent")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the maxent distribution for every marginal order
    Decompose(DecomposeArgs),

    /// Check that the order-k marginal constraints are satisfiable
    Check(OrderArgs),

    /// Show which outcomes the order-k marginals force to zero
    Zeros(OrderArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `marginal-maxent decompose`.
#[derive(Parser, Debug)]
pub struct DecomposeArgs {
    /// Distribution file (JSON)
    pub file: PathBuf,

    /// Highest marginal order [default: number of variables]
    #[arg(short, long)]
    pub k_max: Option<usize>,
}

/// Arguments shared by commands that inspect a single marginal order.
#[derive(Parser, Debug)]
pub struct OrderArgs {
    /// Distribution file (JSON)
    pub file: PathBuf,

    /// Marginal order
    #[arg(short = 'k', long)]
    pub order: usize,
}

/// Subcommands for `marginal-maxent config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
}
