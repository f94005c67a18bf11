//! Handler for `marginal-maxent check`.

use serde_json::json;

use super::command::OrderArgs;
use super::input::load_distribution;
use super::output;
use crate::application::maxent::driver::prepare_dist;
use crate::application::maxent::feasibility::check_feasibility;
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::solver::build_solver;

/// Residual above which the constraint system is reported as unsatisfied.
const RESIDUAL_TOLERANCE: f64 = 1e-6;

/// Solve the minimum-residual LP for the order-k marginal constraints.
pub fn execute(args: &OrderArgs, config: &Config) -> Result<()> {
    let dist = load_distribution(&args.file)?;
    let n_variables = dist.outcome_length();
    if args.order > n_variables {
        return Err(Error::InvalidOrder {
            k: args.order,
            n_variables,
        });
    }

    let prepared = prepare_dist(&dist);
    let solver = build_solver(&config.solver)?;
    let report = check_feasibility(&prepared, args.order, solver.as_ref(), solver.options())?;
    let satisfied = report.residual <= RESIDUAL_TOLERANCE;

    output::record(
        "feasibility",
        json!({
            "k": args.order,
            "residual": report.residual,
            "satisfied": satisfied,
        }),
    );
    if output::is_json() {
        return Ok(());
    }

    output::field("Order", args.order);
    output::field("Residual", format!("{:.3e}", report.residual));
    if satisfied {
        output::success("Marginal constraints are satisfiable");
    } else {
        output::warning("Marginal constraints are only approximately satisfiable");
    }
    Ok(())
}
