//! Round count termination.

use hillclimb_core::LocalSearchProblem;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates after a number of completed rounds.
///
/// # Example
///
/// ```
/// use hillclimb_solver::termination::RoundCountTermination;
///
/// // Give up after 10,000 rounds
/// let term = RoundCountTermination::new(10_000);
/// ```
#[derive(Debug, Clone)]
pub struct RoundCountTermination {
    limit: u64,
}

impl RoundCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl<P: LocalSearchProblem> Termination<P> for RoundCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<P>) -> bool {
        solver_scope.round_count() >= self.limit
    }
}
