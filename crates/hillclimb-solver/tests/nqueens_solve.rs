//! End-to-end N-Queens searches through the solver.

use hillclimb_nqueens::Board;
use hillclimb_solver::{RoundCountTermination, SolveStatus, Solver};
use hillclimb_test::nqueens::is_four_queens_solution;
use hillclimb_test::assert_permutation;

const ROUND_CAP: u64 = 10_000;

fn capped_solver(seed: u64) -> Solver<RoundCountTermination> {
    Solver::new()
        .with_random_seed(seed)
        .with_termination(RoundCountTermination::new(ROUND_CAP))
}

#[test]
fn four_queens_with_fixed_seed() {
    let result = capped_solver(42).solve::<Board>(4).unwrap();

    assert_eq!(result.status, SolveStatus::Solved);
    assert_eq!(result.state.conflict_count(), 0);
    assert!(is_four_queens_solution(&result.state));
}

#[test]
fn four_queens_across_seeds() {
    for seed in 0..25 {
        let result = capped_solver(seed).solve::<Board>(4).unwrap();
        assert!(result.is_solved(), "seed {seed} did not solve 4 queens");
        assert!(is_four_queens_solution(&result.state));
    }
}

#[test]
fn eight_queens_with_retry_budget() {
    // Randomized search: allow a few seeds before calling it a failure.
    let solved = (0..5)
        .map(|seed| capped_solver(seed).solve::<Board>(8).unwrap())
        .find(|result| result.is_solved())
        .expect("no seed solved 8 queens within the round cap");

    assert_eq!(solved.state.conflict_count(), 0);
    assert_permutation(&solved.state);
}

#[test]
fn unsolvable_sizes_never_claim_solved() {
    for size in [2, 3] {
        for seed in 0..5 {
            let mut solver = Solver::new()
                .with_random_seed(seed)
                .with_termination(RoundCountTermination::new(500));
            let result = solver.solve::<Board>(size).unwrap();

            assert_eq!(result.status, SolveStatus::Terminated);
            assert_eq!(result.round_count, 500);
            assert!(result.state.conflict_count() > 0);
            assert_permutation(&result.state);
        }
    }
}

#[test]
fn final_board_keeps_invariants() {
    for size in [5, 6, 10] {
        let result = capped_solver(7).solve::<Board>(size).unwrap();
        assert_permutation(&result.state);
        assert!(result.state.conflict_count() <= size * (size - 1) / 2);
        assert_eq!(result.is_solved(), result.state.conflict_count() == 0);
    }
}
