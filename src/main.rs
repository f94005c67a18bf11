use anyhow::Context;
use clap::Parser;

use marginal_maxent::adapter::inbound::cli::command::Cli;
use marginal_maxent::adapter::inbound::cli::output::{self, OutputConfig};
use marginal_maxent::adapter::inbound::cli::run::execute;
use marginal_maxent::infrastructure::config::settings::Config;

fn main() {
    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    if let Err(e) = run(&cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if cli.quiet {
        config.logging.init_quiet();
    } else {
        config.init_logging();
    }

    execute(&cli.command, &config)?;
    Ok(())
}
