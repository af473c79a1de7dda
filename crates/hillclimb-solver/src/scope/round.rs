//! Round-level scope.

use hillclimb_core::LocalSearchProblem;

use super::SolverScope;

/// Scope for one round of the hill-climbing loop.
///
/// A round is a bounded run of successor requests that ends early the
/// first time a successor equals the current state.
pub struct RoundScope<'a, P: LocalSearchProblem> {
    /// Reference to the parent solver scope.
    solver_scope: &'a mut SolverScope<P>,
    /// Index of this round (0-based).
    round_index: u64,
    /// Accepted successors in this round.
    step_count: u64,
    /// Whether the round ended on a repeated state.
    stuck: bool,
}

impl<'a, P: LocalSearchProblem> RoundScope<'a, P> {
    /// Creates a new round scope.
    pub fn new(solver_scope: &'a mut SolverScope<P>) -> Self {
        let round_index = solver_scope.round_count();
        Self {
            solver_scope,
            round_index,
            step_count: 0,
            stuck: false,
        }
    }

    /// Returns the round index.
    pub fn round_index(&self) -> u64 {
        self.round_index
    }

    /// Returns the accepted step count for this round.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Returns true if the round ended on a repeated state.
    pub fn is_stuck(&self) -> bool {
        self.stuck
    }

    /// Returns the current state.
    pub fn current(&self) -> &P {
        self.solver_scope.current()
    }

    /// Requests a successor of the current state.
    pub fn propose_successor(&mut self) -> P {
        self.solver_scope.propose_successor()
    }

    /// Makes `next` the current state.
    pub fn accept(&mut self, next: P) {
        self.solver_scope.replace_current(next);
        self.step_count += 1;
    }

    /// Records that the successor repeated the current state.
    pub fn mark_stuck(&mut self) {
        self.stuck = true;
    }

    /// Closes the round and bumps the solver's round counters.
    pub fn complete(self) -> u64 {
        self.solver_scope.increment_round_count(self.stuck)
    }
}
