use super::*;

#[test]
fn test_empty_config_uses_defaults() {
    let config = RunnerConfig::from_toml("").unwrap();
    assert_eq!(config, RunnerConfig::default());
    assert_eq!(config.algorithm, AlgorithmKind::AlphaBeta);
    assert!(config.pruning);
}

#[test]
fn test_partial_config() {
    let config = RunnerConfig::from_toml("algorithm = \"negamax\"\nspeed = 9\n").unwrap();
    assert_eq!(config.algorithm, AlgorithmKind::Negamax);
    assert_eq!(config.speed, 9);
    assert!(config.show_tree);
}

#[test]
fn test_unknown_algorithm_is_rejected() {
    assert!(RunnerConfig::from_toml("algorithm = \"mcts\"").is_err());
}

#[test]
fn test_config_survives_toml() {
    let config = RunnerConfig {
        algorithm: AlgorithmKind::Minimax,
        pruning: false,
        speed: 2,
        show_tree: false,
    };
    let text = config.to_toml().unwrap();
    assert_eq!(RunnerConfig::from_toml(&text).unwrap(), config);
}

#[test]
fn test_missing_file_reports_path() {
    let err = RunnerConfig::load(Path::new("/nonexistent/runner.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/runner.toml"));
}
