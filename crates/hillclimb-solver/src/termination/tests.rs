//! Tests for termination conditions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::scope::SolverScope;
use hillclimb_test::{Countdown, Wander};

fn create_test_scope() -> SolverScope<Wander> {
    SolverScope::create(4, 0).unwrap()
}

fn take_steps(scope: &mut SolverScope<Wander>, steps: usize) {
    for _ in 0..steps {
        let next = scope.propose_successor();
        scope.replace_current(next);
    }
}

#[test]
fn test_no_termination() {
    let mut scope = create_test_scope();
    for _ in 0..100 {
        scope.increment_round_count(false);
    }
    assert!(!NoTermination.is_terminated(&scope));
}

#[test]
fn test_round_count_termination() {
    let mut scope = create_test_scope();
    let term = RoundCountTermination::new(3);

    assert!(!term.is_terminated(&scope));
    scope.increment_round_count(false);
    scope.increment_round_count(true);
    assert!(!term.is_terminated(&scope));
    scope.increment_round_count(false);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_round_count_zero_terminates_immediately() {
    let scope = create_test_scope();
    assert!(RoundCountTermination::new(0).is_terminated(&scope));
}

#[test]
fn test_step_count_termination() {
    let mut scope = create_test_scope();
    let term = StepCountTermination::new(5);

    take_steps(&mut scope, 4);
    assert!(!term.is_terminated(&scope));
    take_steps(&mut scope, 1);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_time_termination() {
    let scope = create_test_scope();
    assert!(!TimeTermination::seconds(3600).is_terminated(&scope));
    assert!(TimeTermination::new(Duration::ZERO).is_terminated(&scope));
}

#[test]
fn test_time_termination_after_sleep() {
    let scope = create_test_scope();
    let term = TimeTermination::millis(10);
    std::thread::sleep(Duration::from_millis(20));
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_external_termination() {
    let scope = create_test_scope();
    let flag = Arc::new(AtomicBool::new(false));
    let term = ExternalTermination::new(Arc::clone(&flag));

    assert!(!term.is_terminated(&scope));
    flag.store(true, Ordering::SeqCst);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_option_termination() {
    let scope = create_test_scope();
    let none: Option<RoundCountTermination> = None;
    assert!(!none.is_terminated(&scope));
    assert!(Some(RoundCountTermination::new(0)).is_terminated(&scope));
}

#[test]
fn test_or_termination() {
    let mut scope = create_test_scope();
    let term = OrTermination((
        RoundCountTermination::new(2),
        StepCountTermination::new(100),
    ));

    scope.increment_round_count(false);
    assert!(!term.is_terminated(&scope));
    scope.increment_round_count(false);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_and_termination() {
    let mut scope = create_test_scope();
    let term = AndTermination((RoundCountTermination::new(1), StepCountTermination::new(2)));

    scope.increment_round_count(false);
    assert!(!term.is_terminated(&scope));
    take_steps(&mut scope, 2);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_or_termination_with_absent_children() {
    let mut scope: SolverScope<Countdown> = SolverScope::create(3, 0).unwrap();
    let term = OrTermination((
        None::<TimeTermination>,
        Some(RoundCountTermination::new(1)),
        None::<StepCountTermination>,
    ));

    assert!(!term.is_terminated(&scope));
    scope.increment_round_count(true);
    assert!(term.is_terminated(&scope));
}
