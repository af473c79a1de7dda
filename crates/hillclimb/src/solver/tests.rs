//! Tests for the N-Queens entry point.

use super::*;
use std::io::Write;

#[test]
fn test_solve_four_queens() {
    let config = SolverConfig::new()
        .with_random_seed(42)
        .with_round_count_limit(10_000);

    let result = solve_nqueens(4, &config).unwrap();

    assert!(result.is_solved());
    assert_eq!(result.heuristic(), 0);
    assert_eq!(result.seed, 42);
}

#[test]
fn test_single_queen_is_solved_immediately() {
    let result = solve_nqueens(1, &SolverConfig::new().with_random_seed(1)).unwrap();

    assert!(result.is_solved());
    assert_eq!(result.state.rows(), &[0]);
    assert_eq!(result.round_count, 1);
}

#[test]
fn test_zero_size_is_rejected() {
    let result = solve_nqueens(0, &SolverConfig::new());
    assert_eq!(result.unwrap_err(), HillClimbError::InvalidSize { size: 0 });
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = SolverConfig::new().with_round_length_factor(0);
    assert!(matches!(
        solve_nqueens(4, &config),
        Err(HillClimbError::Config(_))
    ));
}

#[test]
fn test_three_queens_stops_at_round_limit() {
    let config = SolverConfig::new()
        .with_random_seed(3)
        .with_round_count_limit(50);

    let result = solve_nqueens(3, &config).unwrap();

    assert!(!result.is_solved());
    assert!(result.heuristic() > 0);
    assert_eq!(result.round_count, 50);
}

#[test]
fn test_cannot_stop_only_for_unbounded_two_and_three() {
    let unbounded = SolverConfig::new();
    assert!(cannot_stop(2, &unbounded));
    assert!(cannot_stop(3, &unbounded));
    assert!(!cannot_stop(1, &unbounded));
    assert!(!cannot_stop(4, &unbounded));

    assert!(!cannot_stop(3, &SolverConfig::new().with_round_count_limit(10)));
    assert!(!cannot_stop(2, &SolverConfig::new().with_termination_seconds(1)));

    // A termination section with every limit unset still never stops.
    let empty_limits = SolverConfig {
        termination: Some(TerminationConfig::default()),
        ..SolverConfig::default()
    };
    assert!(cannot_stop(3, &empty_limits));
}

#[test]
fn test_load_config_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "random_seed = 11").unwrap();

    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.random_seed, Some(11));
}

#[test]
fn test_load_config_missing_path_is_an_error() {
    let result = load_config(Some(Path::new("/definitely/not/here/solver.toml")));
    assert!(matches!(result, Err(HillClimbError::Config(msg)) if msg.contains("solver.toml")));
}

#[test]
fn test_load_config_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[termination").unwrap();

    assert!(matches!(
        load_config(Some(file.path())),
        Err(HillClimbError::Config(_))
    ));
}

#[test]
fn test_load_config_without_path_falls_back_to_defaults() {
    // The crate directory carries no solver.toml.
    assert_eq!(load_config(None).unwrap(), SolverConfig::default());
}
