use std::io::Write;

use marginal_maxent::error::{ConfigError, Error};
use marginal_maxent::infrastructure::config::settings::Config;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn config_loads_every_section() {
    let toml = r#"
[logging]
level = "debug"
format = "json"

[optimizer]
max_iterations = 250
tolerance = 1e-4
cleanup_tolerance = 1e-5
direction_tolerance = 1e-8
verbose = true

[solver]
backend = "highs"
time_limit = 30.0
threads = 2

[maxent]
k_max = 2
"#;

    let file = write_temp_config(toml);
    let config = Config::load(file.path()).expect("valid config");

    assert_eq!(config.logging.format, "json");
    assert_eq!(config.optimizer.max_iterations, 250);
    assert_eq!(config.optimizer.cleanup_tolerance, 1e-5);
    assert!(config.optimizer.verbose);
    assert_eq!(config.solver.time_limit, Some(30.0));
    assert_eq!(config.maxent.k_max, Some(2));

    let core = config.optimizer.to_core_config();
    assert_eq!(core.tolerance, 1e-4);
    assert_eq!(core.direction_tolerance, 1e-8);

    let options = config.solver.options();
    assert_eq!(options.threads, Some(2));
    assert!(!options.verbose);
}

#[test]
fn config_tolerances_are_independent() {
    let file = write_temp_config("[optimizer]\ntolerance = 0.01\n");
    let config = Config::load(file.path()).expect("valid config");

    assert_eq!(config.optimizer.tolerance, 0.01);
    assert_eq!(config.optimizer.cleanup_tolerance, 1e-3);
}

#[test]
fn config_rejects_zero_time_limit() {
    let file = write_temp_config("[solver]\ntime_limit = 0.0\n");
    let result = Config::load(file.path());

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "time_limit",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid time limit error, got {err}"),
        Ok(config) => panic!(
            "Expected zero time limit to be rejected, got {:?}",
            config.solver.time_limit
        ),
    }
}

#[test]
fn config_rejects_malformed_toml() {
    let file = write_temp_config("[optimizer\nmax_iterations = 1\n");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn config_reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = Config::load(dir.path().join("missing.toml"));
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}
