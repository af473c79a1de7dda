//! N-Queens problem representation for hillclimb.
//!
//! The N-Queens problem places N queens on an N×N chessboard such that no
//! two queens threaten each other. A [`Board`] stores one queen per column
//! and implements [`hillclimb_core::LocalSearchProblem`], so it can be
//! handed straight to the hill-climbing solver.

mod board;

pub use board::Board;
