//! Composite termination conditions (AND/OR).
//!
//! Uses macro-generated tuple implementations so every child keeps its
//! concrete type.

use hillclimb_core::LocalSearchProblem;

use super::Termination;
use crate::scope::SolverScope;

/// Combines multiple terminations with OR logic (any must terminate).
///
/// # Examples
///
/// ```
/// use hillclimb_solver::termination::{
///     OrTermination, RoundCountTermination, TimeTermination,
/// };
///
/// // Terminate after 30 seconds OR 1000 rounds
/// let termination = OrTermination((
///     TimeTermination::seconds(30),
///     RoundCountTermination::new(1000),
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    /// Creates a new OR termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Combines multiple terminations with AND logic (all must terminate).
///
/// # Examples
///
/// ```
/// use hillclimb_solver::termination::{
///     AndTermination, RoundCountTermination, StepCountTermination,
/// };
///
/// // Terminate once at least 100 rounds AND 5000 steps are done
/// let termination = AndTermination((
///     RoundCountTermination::new(100),
///     StepCountTermination::new(5000),
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct AndTermination<T>(pub T);

impl<T> AndTermination<T> {
    /// Creates a new AND termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Generates `Termination` implementations for OR and AND tuples.
macro_rules! impl_composite_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<P, $($T),+> Termination<P> for OrTermination<($($T,)+)>
        where
            P: LocalSearchProblem,
            $($T: Termination<P>,)+
        {
            fn is_terminated(&self, solver_scope: &SolverScope<P>) -> bool {
                $((self.0).$idx.is_terminated(solver_scope))||+
            }
        }

        impl<P, $($T),+> Termination<P> for AndTermination<($($T,)+)>
        where
            P: LocalSearchProblem,
            $($T: Termination<P>,)+
        {
            fn is_terminated(&self, solver_scope: &SolverScope<P>) -> bool {
                $((self.0).$idx.is_terminated(solver_scope))&&+
            }
        }
    };
}

impl_composite_termination!(0: T0);
impl_composite_termination!(0: T0, 1: T1);
impl_composite_termination!(0: T0, 1: T1, 2: T2);
impl_composite_termination!(0: T0, 1: T1, 2: T2, 3: T3);
impl_composite_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4);
