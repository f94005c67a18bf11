//! Handler for `marginal-maxent zeros`.

use serde_json::json;

use super::command::OrderArgs;
use super::input::{format_outcome, load_distribution};
use super::output;
use crate::application::maxent::driver::prepare_dist;
use crate::application::maxent::zeros::isolate_zeros;
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;

/// List the outcomes forced to zero by the order-k marginals.
pub fn execute(args: &OrderArgs, _config: &Config) -> Result<()> {
    let dist = load_distribution(&args.file)?;
    let n_variables = dist.outcome_length();
    if args.order > n_variables {
        return Err(Error::InvalidOrder {
            k: args.order,
            n_variables,
        });
    }

    let prepared = prepare_dist(&dist);
    let isolated = isolate_zeros(&prepared, args.order)?;
    let partition = &isolated.partition;
    let outcomes = prepared.outcomes();
    let forced: Vec<String> = partition
        .zero
        .iter()
        .map(|&i| format_outcome(&outcomes[i]))
        .collect();

    output::record(
        "zeros",
        json!({
            "k": args.order,
            "zero": partition.zero,
            "nonzero": partition.nonzero,
            "outcomes": forced,
        }),
    );
    if output::is_json() {
        return Ok(());
    }

    output::field("Order", args.order);
    output::field(
        "Forced",
        format!("{} of {}", partition.zero.len(), partition.len()),
    );
    for outcome in &forced {
        output::field("", output::muted(outcome));
    }
    Ok(())
}
