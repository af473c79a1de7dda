//! N-Queens test helpers.

use hillclimb_nqueens::Board;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The two solutions of the 4-queens problem, as rows by column.
pub const FOUR_QUEENS_SOLUTIONS: [[usize; 4]; 2] = [[1, 3, 0, 2], [2, 0, 3, 1]];

/// Creates a deterministic RNG for tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Asserts that `board` holds each row `0..n` exactly once.
pub fn assert_permutation(board: &Board) {
    let mut rows = board.rows().to_vec();
    rows.sort_unstable();
    let expected: Vec<usize> = (0..board.size()).collect();
    assert_eq!(rows, expected, "{board} is not a permutation");
}

/// Returns true if `board` is one of the two 4-queens solutions.
pub fn is_four_queens_solution(board: &Board) -> bool {
    FOUR_QUEENS_SOLUTIONS
        .iter()
        .any(|solution| board.rows() == solution.as_slice())
}
