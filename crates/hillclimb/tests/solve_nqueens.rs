//! End-to-end N-Queens solving through the public facade.

use hillclimb::prelude::*;
use hillclimb::TerminationConfig;

fn bounded(seed: u64) -> SolverConfig {
    SolverConfig::new()
        .with_random_seed(seed)
        .with_round_count_limit(10_000)
}

#[test]
fn eight_queens_within_retry_budget() {
    let solved = (0..5)
        .map(|seed| solve_nqueens(8, &bounded(seed)).unwrap())
        .find(SolveResult::is_solved)
        .expect("one of five seeds solves 8 queens");

    assert!(solved.state.is_solution());
    assert_eq!(solved.status, SolveStatus::Solved);
}

#[test]
fn same_seed_reproduces_the_search() {
    let first = solve_nqueens(6, &bounded(99)).unwrap();
    let second = solve_nqueens(6, &bounded(99)).unwrap();

    assert_eq!(first.state, second.state);
    assert_eq!(first.round_count, second.round_count);
    assert_eq!(first.step_count, second.step_count);
}

#[test]
fn two_queens_step_limit_terminates() {
    let config = SolverConfig {
        random_seed: Some(5),
        termination: Some(TerminationConfig {
            step_count_limit: Some(20),
            ..TerminationConfig::default()
        }),
        ..SolverConfig::default()
    };

    let result = solve_nqueens(2, &config).unwrap();

    assert_eq!(result.status, SolveStatus::Terminated);
    assert_eq!(result.heuristic(), 1);
    assert!(result.step_count >= 20);
}

#[test]
fn result_is_always_a_permutation() {
    for size in 1..=7 {
        let result = solve_nqueens(size, &bounded(size as u64)).unwrap();
        let mut rows = result.state.rows().to_vec();
        rows.sort_unstable();
        assert_eq!(rows, (0..size).collect::<Vec<_>>());
    }
}
