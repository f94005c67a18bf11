//! Tests for factory functions.
//!
//! Verifies that factory functions correctly build components based on
//! configuration settings.

use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::solver;

fn minimal_config() -> Config {
    let toml = r#"
        [logging]
        level = "info"
        format = "pretty"

        [solver]
        time_limit = 5.0
        threads = 1

        [optimizer]
        max_iterations = 25
    "#;
    Config::parse_toml(toml).expect("minimal config should parse")
}

#[test]
fn builds_highs_with_configured_options() {
    let config = minimal_config();
    let solver = solver::build_solver(&config.solver).unwrap();

    assert_eq!(solver.name(), "highs");
    assert_eq!(solver.options().time_limit, Some(5.0));
    assert_eq!(solver.options().threads, Some(1));
    assert!(!solver.options().verbose);
}

#[test]
fn rejects_unknown_backend() {
    let mut config = minimal_config();
    config.solver.backend = "cplex".to_string();

    assert!(solver::build_solver(&config.solver).is_err());
}

#[test]
fn optimizer_uses_configured_budget() {
    let config = minimal_config();
    let maxent = solver::build_maxent(&config.optimizer);

    assert_eq!(maxent.config().max_iterations, 25);
    assert_eq!(maxent.config().tolerance, 1e-3);
}
