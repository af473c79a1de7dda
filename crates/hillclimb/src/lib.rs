//! hillclimb - Hill Climbing with Plateau Moves
//!
//! Solve N-Queens with one call, or plug your own state type into the
//! generic [`Solver`].
//!
//! # Example
//!
//! ```rust
//! use hillclimb::prelude::*;
//!
//! let config = SolverConfig::new()
//!     .with_random_seed(7)
//!     .with_round_count_limit(10_000);
//!
//! let result = solve_nqueens(4, &config).unwrap();
//! if result.is_solved() {
//!     assert_eq!(result.heuristic(), 0);
//! }
//! ```

// Problem abstraction and errors
pub use hillclimb_core::{HillClimbError, LocalSearchProblem, Result};

// N-Queens board
pub use hillclimb_nqueens::Board;

// Configuration
pub use hillclimb_config::{ConfigError, HillClimbingConfig, SolverConfig, TerminationConfig};

// Driver and terminations
pub use hillclimb_solver::{
    AndTermination, ExternalTermination, NoTermination, OrTermination, RoundCountTermination,
    SolveResult, SolveStatus, Solver, StepCountTermination, Termination, TimeTermination,
};

mod solver;
pub use solver::{load_config, solve_nqueens, DEFAULT_CONFIG_FILE};

pub mod prelude {
    pub use super::{load_config, solve_nqueens};
    pub use super::{Board, HillClimbError, LocalSearchProblem, SolverConfig};
    pub use super::{SolveResult, SolveStatus, Solver};
}
