//! External termination via AtomicBool flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hillclimb_core::LocalSearchProblem;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates when an external flag is set.
///
/// Allows another thread (a signal handler, a watchdog) to stop a search
/// that would otherwise run until solved.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use hillclimb_solver::termination::ExternalTermination;
///
/// let flag = Arc::new(AtomicBool::new(false));
/// let term = ExternalTermination::new(Arc::clone(&flag));
///
/// // Later: flag.store(true, Ordering::SeqCst);
/// # flag.store(true, Ordering::SeqCst);
/// ```
#[derive(Debug, Clone)]
pub struct ExternalTermination {
    flag: Arc<AtomicBool>,
}

impl ExternalTermination {
    /// Creates a termination that checks the given flag.
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }
}

impl<P: LocalSearchProblem> Termination<P> for ExternalTermination {
    fn is_terminated(&self, _solver_scope: &SolverScope<P>) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
