//! Hill-climbing phase.
//!
//! Logging levels:
//! - **DEBUG**: One event per completed round with steps and heuristic
//! - **TRACE**: Rounds that ended on a repeated state

use std::fmt::{self, Debug};

use hillclimb_core::LocalSearchProblem;
use tracing::{debug, enabled, trace, Level};

use crate::scope::{RoundScope, SolverScope};
use crate::solver::SolveStatus;
use crate::termination::Termination;

/// Hill climbing with plateau moves over any [`LocalSearchProblem`].
///
/// Each round asks the current state for up to `size * round_length_factor`
/// successors. A successor that differs from the current state replaces it
/// unconditionally; the state itself decides what it is willing to offer.
/// The first successor equal to the current state ends the round early.
///
/// After every round the current state is tested against the objective.
/// An unsolved state starts the next round as it is: there is no random
/// restart, so a state that never yields a different successor keeps the
/// loop going until a [`Termination`] fires. With no termination such a
/// search never returns.
pub struct HillClimbingPhase {
    round_length_factor: usize,
}

impl HillClimbingPhase {
    /// Creates a phase running `size * round_length_factor` requests per round.
    pub fn new(round_length_factor: usize) -> Self {
        Self {
            round_length_factor,
        }
    }

    /// Returns the number of successor requests per unit of size.
    pub fn round_length_factor(&self) -> usize {
        self.round_length_factor
    }

    /// Returns the number of successor requests in one round for `size`,
    /// saturating at `usize::MAX`.
    pub fn round_length(&self, size: usize) -> usize {
        size.saturating_mul(self.round_length_factor)
    }

    /// Runs rounds until the current state is objective or `termination`
    /// fires.
    pub fn solve<P, T>(
        &mut self,
        size: usize,
        solver_scope: &mut SolverScope<P>,
        termination: &T,
    ) -> SolveStatus
    where
        P: LocalSearchProblem,
        T: Termination<P>,
    {
        let round_length = self.round_length(size);

        loop {
            let mut round = RoundScope::new(solver_scope);

            for _ in 0..round_length {
                let successor = round.propose_successor();
                if successor != *round.current() {
                    round.accept(successor);
                } else {
                    round.mark_stuck();
                    break;
                }
            }

            if round.is_stuck() {
                trace!(
                    event = "stuck",
                    round = round.round_index(),
                    steps = round.step_count(),
                );
            }
            if enabled!(Level::DEBUG) {
                debug!(
                    event = "round_end",
                    round = round.round_index(),
                    steps = round.step_count(),
                    heuristic = round.current().heuristic() as u64,
                    stuck = round.is_stuck(),
                );
            }
            round.complete();

            if solver_scope.current().is_objective() {
                return SolveStatus::Solved;
            }
            if termination.is_terminated(solver_scope) {
                return SolveStatus::Terminated;
            }
        }
    }
}

impl Debug for HillClimbingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HillClimbingPhase")
            .field("round_length_factor", &self.round_length_factor)
            .finish()
    }
}
