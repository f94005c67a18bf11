//! Subcommand dispatch.

use super::command::Commands;
use super::{check, config, decompose, zeros};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Run a parsed subcommand against the effective configuration.
///
/// # Errors
///
/// Propagates the handler's error.
pub fn execute(command: &Commands, settings: &Config) -> Result<()> {
    match command {
        Commands::Decompose(args) => decompose::execute(args, settings),
        Commands::Check(args) => check::execute(args, settings),
        Commands::Zeros(args) => zeros::execute(args, settings),
        Commands::Config(command) => config::execute(command, settings),
    }
}
