//! Step count termination.

use hillclimb_core::LocalSearchProblem;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates after a number of accepted successor moves.
///
/// # Example
///
/// ```
/// use hillclimb_solver::termination::StepCountTermination;
///
/// // Terminate after 1000 steps
/// let term = StepCountTermination::new(1000);
/// ```
#[derive(Debug, Clone)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl<P: LocalSearchProblem> Termination<P> for StepCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<P>) -> bool {
        solver_scope.step_count() >= self.limit
    }
}
