//! Termination conditions for an unsolved search.
//!
//! The hill-climbing loop has no built-in exit other than reaching an
//! objective state. A termination is an opt-in cap checked between rounds.

mod composite;
mod external;
mod round_count;
mod step_count;
mod time;

use std::fmt::Debug;

use hillclimb_core::LocalSearchProblem;

use crate::scope::SolverScope;

pub use composite::{AndTermination, OrTermination};
pub use external::ExternalTermination;
pub use round_count::RoundCountTermination;
pub use step_count::StepCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop an unsolved search.
///
/// # Type Parameters
/// * `P` - The problem state type
pub trait Termination<P: LocalSearchProblem>: Send + Debug {
    /// Returns true if solving should terminate.
    fn is_terminated(&self, solver_scope: &SolverScope<P>) -> bool;
}

/// Marker type indicating no termination: search until solved.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl<P: LocalSearchProblem> Termination<P> for NoTermination {
    fn is_terminated(&self, _solver_scope: &SolverScope<P>) -> bool {
        false
    }
}

/// An absent termination never fires.
impl<P: LocalSearchProblem, T: Termination<P>> Termination<P> for Option<T> {
    fn is_terminated(&self, solver_scope: &SolverScope<P>) -> bool {
        match self {
            Some(t) => t.is_terminated(solver_scope),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests;
