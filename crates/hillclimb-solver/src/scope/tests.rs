//! Tests for scope types.

use super::*;
use hillclimb_core::HillClimbError;
use hillclimb_test::{Countdown, Plateau};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_solver_scope_create() {
    let scope = SolverScope::<Countdown>::create(5, 42).unwrap();
    assert_eq!(scope.current().remaining, 5);
    assert_eq!(scope.seed(), 42);
    assert_eq!(scope.round_count(), 0);
    assert_eq!(scope.step_count(), 0);
    assert_eq!(scope.stuck_round_count(), 0);
}

#[test]
fn test_solver_scope_create_propagates_error() {
    let result = SolverScope::<hillclimb_nqueens::Board>::create(0, 1);
    assert!(matches!(result, Err(HillClimbError::InvalidSize { size: 0 })));
}

#[test]
fn test_solver_scope_draws_from_seeded_rng() {
    let scope = SolverScope::<Plateau>::create(3, 7).unwrap();
    let expected: u64 = StdRng::seed_from_u64(7).random();
    assert_eq!(scope.current().id, expected);
}

#[test]
fn test_propose_successor_does_not_replace() {
    let mut scope = SolverScope::<Countdown>::create(2, 0).unwrap();
    let next = scope.propose_successor();
    assert_eq!(next.remaining, 1);
    assert_eq!(scope.current().remaining, 2);
    assert_eq!(scope.step_count(), 0);
}

#[test]
fn test_round_scope_accept_and_complete() {
    let mut scope = SolverScope::<Countdown>::create(2, 0).unwrap();

    let mut round = RoundScope::new(&mut scope);
    assert_eq!(round.round_index(), 0);
    let next = round.propose_successor();
    round.accept(next);
    assert_eq!(round.current().remaining, 1);
    assert_eq!(round.step_count(), 1);
    assert!(!round.is_stuck());
    assert_eq!(round.complete(), 1);

    assert_eq!(scope.round_count(), 1);
    assert_eq!(scope.step_count(), 1);
    assert_eq!(scope.stuck_round_count(), 0);
}

#[test]
fn test_round_scope_stuck() {
    let mut scope = SolverScope::<Plateau>::create(2, 0).unwrap();

    let mut round = RoundScope::new(&mut scope);
    round.mark_stuck();
    assert!(round.is_stuck());
    round.complete();

    let round = RoundScope::new(&mut scope);
    assert_eq!(round.round_index(), 1);
    round.complete();

    assert_eq!(scope.round_count(), 2);
    assert_eq!(scope.stuck_round_count(), 1);
}
