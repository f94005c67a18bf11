//! Handler for `marginal-maxent decompose`.

use serde_json::json;

use super::command::DecomposeArgs;
use super::input::{format_outcome, load_distribution};
use super::output;
use crate::application::maxent::driver::marginal_maxent_dists;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::solver::{build_maxent, build_solver};

/// Print the maxent distribution of every order from 0 to `k_max`.
///
/// `--k-max` overrides `[maxent].k_max` from the configuration.
pub fn execute(args: &DecomposeArgs, config: &Config) -> Result<()> {
    let dist = load_distribution(&args.file)?;
    let solver = build_solver(&config.solver)?;
    let maxent = build_maxent(&config.optimizer);
    let k_max = args.k_max.or(config.maxent.k_max);

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("File", args.file.display());
    output::field("Variables", dist.outcome_length());
    output::field("Solver", solver.name());

    let dists = marginal_maxent_dists(&dist, k_max, &maxent, solver.as_ref())?;
    for (k, order) in dists.iter().enumerate() {
        let entropy = order.entropy();
        output::record(
            "order",
            json!({
                "k": k,
                "entropy": entropy,
                "outcomes": order.outcomes().iter().map(|o| format_outcome(o)).collect::<Vec<_>>(),
                "pmf": order.pmf(),
            }),
        );
        if output::is_json() {
            continue;
        }

        output::section(&format!("k = {k}"));
        output::field("Entropy", output::highlight(format!("{entropy:.6} bits")));
        for (outcome, p) in order.outcomes().iter().zip(order.pmf()) {
            output::mass(&format_outcome(outcome), *p);
        }
    }
    Ok(())
}
