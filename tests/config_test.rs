use clap::{CommandFactory, FromArgMatches, Parser};
use qea::config::{parse_f64_list, ProblemParams, QeaConfig, SearchParams};
use qea::cost::Benchmark;
use qea::error::QeaError;
use std::fs;

// Helper to create a small config for testing without relying on Clap parsing
fn get_test_config() -> QeaConfig {
    QeaConfig {
        problem: ProblemParams {
            function: Benchmark::ShiftedSphere,
            n_dims: 3,
            upper: "5.12".to_string(),
            lower: "-5".to_string(),
        },
        search: SearchParams {
            sigma_scaler: "1.003".to_string(),
            mu_scaler: "10".to_string(),
            elitist_count: 2,
            n_iterations: 10,
            sample_size: 8,
            report_interval: 0,
        },
    }
}

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: QeaConfig,
}

#[test]
fn test_defaults_match_reference_run() {
    let config = QeaConfig::default();
    assert_eq!(config.problem.function, Benchmark::ShiftedSphere);
    assert_eq!(config.problem.n_dims, 1000);
    assert_eq!(config.search.elitist_count, 6);
    assert_eq!(config.search.n_iterations, 1000);
    assert_eq!(config.search.sample_size, 200);
    assert_eq!(config.search.report_interval, 100);

    let settings = config.settings().unwrap();
    assert_eq!(settings.bounds.upper()[999], 5.12);
    assert_eq!(settings.bounds.lower()[0], -5.0);
    assert_eq!(settings.scalers.mu[0], 10.0);
    assert_eq!(settings.scalers.sigma[0], 1.003);
}

#[test]
fn test_clap_defaults_agree_with_default_impl() {
    let cli = TestCli::try_parse_from(["qea"]).unwrap();
    let default = QeaConfig::default();
    assert_eq!(cli.config.problem.n_dims, default.problem.n_dims);
    assert_eq!(cli.config.problem.upper, default.problem.upper);
    assert_eq!(cli.config.problem.lower, default.problem.lower);
    assert_eq!(cli.config.search.sigma_scaler, default.search.sigma_scaler);
    assert_eq!(cli.config.search.mu_scaler, default.search.mu_scaler);
    assert_eq!(cli.config.search.sample_size, default.search.sample_size);
}

#[test]
fn test_per_dimension_lists_are_parsed() {
    let mut config = get_test_config();
    config.problem.upper = "1, 2, 3".to_string();
    config.problem.lower = "-1,-2,-3".to_string();
    config.search.mu_scaler = "5,10,20".to_string();

    let settings = config.settings().unwrap();
    assert_eq!(settings.bounds.upper(), &[1.0, 2.0, 3.0]);
    assert_eq!(settings.bounds.lower(), &[-1.0, -2.0, -3.0]);
    assert_eq!(settings.scalers.mu, vec![5.0, 10.0, 20.0]);
    assert_eq!(settings.scalers.sigma, vec![1.003; 3]);
}

#[test]
fn test_wrong_list_length_is_a_dimension_mismatch() {
    let mut config = get_test_config();
    config.problem.upper = "1,2".to_string();
    assert!(matches!(
        config.settings(),
        Err(QeaError::DimensionMismatch {
            expected: 3,
            found: 2,
            ..
        })
    ));
}

#[test]
fn test_garbage_numbers_are_rejected() {
    assert!(matches!(
        parse_f64_list("1.0, abc", 2, "upper bounds"),
        Err(QeaError::InvalidParameter(_))
    ));
    assert_eq!(parse_f64_list(" 2.5 ", 4, "x").unwrap(), vec![2.5; 4]);
}

#[test]
fn test_inverted_bounds_are_rejected() {
    let mut config = get_test_config();
    config.problem.upper = "-6".to_string();
    assert!(matches!(
        config.settings(),
        Err(QeaError::InvalidParameter(_))
    ));
}

#[test]
fn test_load_from_file_with_partial_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("qea.json");
    fs::write(
        &path,
        r#"{
            "problem": { "function": "rastrigin", "n_dims": 4 },
            "search": { "elitist_count": 3, "mu_scaler": "8" }
        }"#,
    )
    .unwrap();

    let config = QeaConfig::load_from_file(&path).unwrap();
    assert_eq!(config.problem.function, Benchmark::Rastrigin);
    assert_eq!(config.problem.n_dims, 4);
    assert_eq!(config.search.elitist_count, 3);
    assert_eq!(config.search.mu_scaler, "8");
    // Missing fields fall back to defaults
    assert_eq!(config.problem.upper, "5.12");
    assert_eq!(config.search.sample_size, 200);
}

#[test]
fn test_load_from_missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = QeaConfig::load_from_file(dir.path().join("nope.json"));
    assert!(matches!(result, Err(QeaError::Config(_))));
}

#[test]
fn test_cli_flags_override_file_values_only_when_typed() {
    let mut from_file = get_test_config();
    from_file.search.sample_size = 64;

    let matches = TestCli::command()
        .try_get_matches_from(["qea", "--elitist-count", "5", "--function", "ackley"])
        .unwrap();
    let cli = TestCli::from_arg_matches(&matches).unwrap();

    from_file.merge_from_cli(&cli.config, &matches);

    assert_eq!(from_file.search.elitist_count, 5);
    assert_eq!(from_file.problem.function, Benchmark::Ackley);
    // Untyped flags keep the file's values, not clap's defaults
    assert_eq!(from_file.search.sample_size, 64);
    assert_eq!(from_file.problem.n_dims, 3);
}

#[test]
fn test_negative_bounds_parse_from_command_line() {
    let cli = TestCli::try_parse_from(["qea", "--lower", "-10", "--upper", "-1,-2"]).unwrap();
    assert_eq!(cli.config.problem.lower, "-10");
    assert_eq!(cli.config.problem.upper, "-1,-2");
}
