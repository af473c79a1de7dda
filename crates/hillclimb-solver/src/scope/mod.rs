//! Scope hierarchy for solver execution.
//!
//! Scopes maintain state at different levels of the solving process:
//! - [`SolverScope`]: Top-level, owns the current state and the random source
//! - [`RoundScope`]: Per-round state of the hill-climbing loop

mod round;
mod solver;

pub use round::RoundScope;
pub use solver::SolverScope;

#[cfg(test)]
mod tests;
