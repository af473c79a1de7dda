//! Time-based termination.

use std::time::Duration;

use hillclimb_core::LocalSearchProblem;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates after a time limit.
///
/// The limit is only checked between rounds, so a run may overshoot it by
/// up to one round.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use hillclimb_solver::termination::TimeTermination;
///
/// // Terminate after 30 seconds
/// let term = TimeTermination::new(Duration::from_secs(30));
///
/// // Or use convenience constructors
/// let term = TimeTermination::seconds(30);
/// let term = TimeTermination::millis(500);
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }
}

impl<P: LocalSearchProblem> Termination<P> for TimeTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<P>) -> bool {
        solver_scope.elapsed() >= self.limit
    }
}
