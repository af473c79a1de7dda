//! N-Queens board state.

use std::fmt;

use hillclimb_core::{HillClimbError, LocalSearchProblem, Result};
use rand::Rng;

/// Successor attempts per queen before a board is reported as stuck.
const SUCCESSOR_ATTEMPTS_PER_QUEEN: usize = 2;

/// One candidate placement of N queens.
///
/// The index of `rows` is the column of a queen and the value is its row,
/// so there is exactly one queen per column. Boards built through
/// [`Board::random`], [`Board::from_rows`] or [`LocalSearchProblem::successor`]
/// always hold a permutation of `0..n`, which also rules out two queens
/// sharing a row.
///
/// # Example
///
/// ```
/// use hillclimb_nqueens::Board;
///
/// let board = Board::from_rows(vec![1, 3, 0, 2]).unwrap();
/// assert_eq!(board.conflict_count(), 0);
/// assert!(board.is_solution());
/// assert_eq!(board.to_string(), "[1, 3, 0, 2]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    rows: Vec<usize>,
}

impl Board {
    /// Creates a random board of `size` queens.
    ///
    /// Starts from the identity permutation and applies `size` random
    /// pairwise swaps. Swap positions are drawn with replacement, so some
    /// swaps may be no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`HillClimbError::InvalidSize`] if `size` is zero.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(HillClimbError::InvalidSize { size });
        }

        let mut board = Self {
            rows: (0..size).collect(),
        };
        board.shuffle(rng);
        Ok(board)
    }

    /// Creates a board with queens at the given rows.
    ///
    /// # Errors
    ///
    /// Returns [`HillClimbError::InvalidSize`] for an empty slice and
    /// [`HillClimbError::NotAPermutation`] if `rows` is not a permutation
    /// of `0..rows.len()`.
    pub fn from_rows(rows: Vec<usize>) -> Result<Self> {
        if rows.is_empty() {
            return Err(HillClimbError::InvalidSize { size: 0 });
        }

        let mut seen = vec![false; rows.len()];
        for (column, &row) in rows.iter().enumerate() {
            if row >= rows.len() {
                return Err(HillClimbError::NotAPermutation(format!(
                    "row {row} of column {column} is outside 0..{}",
                    rows.len()
                )));
            }
            if seen[row] {
                return Err(HillClimbError::NotAPermutation(format!(
                    "row {row} appears more than once"
                )));
            }
            seen[row] = true;
        }

        Ok(Self { rows })
    }

    /// Creates a board without checking the permutation invariant.
    ///
    /// Useful for counting conflicts of arbitrary placements, such as two
    /// queens on the same row. Do not search from such a board.
    pub fn from_rows_unchecked(rows: Vec<usize>) -> Self {
        Self { rows }
    }

    /// Returns the number of queens (and the side length of the board).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row of each queen, indexed by column.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Returns true if the queens in columns `first` and `second` attack
    /// each other along a row or a diagonal.
    ///
    /// # Panics
    ///
    /// Panics if either column is out of bounds.
    pub fn are_threats(&self, first: usize, second: usize) -> bool {
        let (row_a, row_b) = (self.rows[first], self.rows[second]);

        // Same row, same `row - column` diagonal, same `row + column` diagonal.
        row_a == row_b || row_a + second == row_b + first || row_a + first == row_b + second
    }

    /// Counts the unordered pairs of queens that threaten each other.
    ///
    /// The result lies in `0..=n * (n - 1) / 2`.
    pub fn conflict_count(&self) -> usize {
        let n = self.rows.len();
        let mut conflicts = 0;

        for i in 0..n {
            for j in (i + 1)..n {
                if self.are_threats(i, j) {
                    conflicts += 1;
                }
            }
        }

        conflicts
    }

    /// Returns true if no two queens threaten each other.
    pub fn is_solution(&self) -> bool {
        self.conflict_count() == 0
    }

    /// Renders the board as an ASCII grid, one line per row.
    pub fn render_grid(&self) -> String {
        let n = self.rows.len();
        let border = "-".repeat(n * 2 + 1);
        let mut out = String::with_capacity((n * 2 + 2) * (n + 2));

        out.push_str(&border);
        out.push('\n');
        for row in 0..n {
            out.push('|');
            for column in 0..n {
                out.push_str(if self.rows[column] == row { "Q|" } else { " |" });
            }
            out.push('\n');
        }
        out.push_str(&border);

        out
    }

    // Swaps the rows of two random columns, possibly the same one.
    fn swap_two<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let n = self.rows.len();
        let first = rng.random_range(0..n);
        let second = rng.random_range(0..n);
        self.rows.swap(first, second);
    }

    fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for _ in 0..self.rows.len() {
            self.swap_two(rng);
        }
    }
}

impl LocalSearchProblem for Board {
    fn create<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        Board::random(size, rng)
    }

    /// Returns the first random single-swap neighbor whose conflict count
    /// is not worse than this board's, trying `2 * n` swaps.
    ///
    /// Equal counts are accepted so the search can walk across plateaus.
    /// When every attempt is worse, an identical copy comes back.
    fn successor<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let current = self.conflict_count();

        for _ in 0..self.rows.len() * SUCCESSOR_ATTEMPTS_PER_QUEEN {
            let mut candidate = self.clone();
            candidate.swap_two(rng);
            if candidate.conflict_count() <= current {
                return candidate;
            }
        }

        self.clone()
    }

    fn is_objective(&self) -> bool {
        self.is_solution()
    }

    fn heuristic(&self) -> usize {
        self.conflict_count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.rows)
    }
}
