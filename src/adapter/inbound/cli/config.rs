//! Handler for `marginal-maxent config`.

use serde_json::json;

use super::command::ConfigCommand;
use super::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

pub fn execute(command: &ConfigCommand, config: &Config) -> Result<()> {
    match command {
        ConfigCommand::Show => show(config),
    }
}

/// Print the effective configuration as TOML (or JSON with `--json`).
fn show(config: &Config) -> Result<()> {
    output::record("config", json!(config));
    output::raw(&config.to_toml()?);
    Ok(())
}
