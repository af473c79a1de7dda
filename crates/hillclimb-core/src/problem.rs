//! The capability set searched by the hill-climbing driver.

use std::fmt::Debug;

use rand::Rng;

use crate::error::Result;

/// A candidate state of a local search problem.
///
/// The driver only ever asks a state for a random initial value, for a
/// successor, and whether it is an objective state. Successors are new
/// values; the receiver is never mutated, so the driver can compare the two
/// with `PartialEq` to detect that the search is stuck.
///
/// Randomness is always passed in, which keeps a seeded run reproducible.
///
/// # Example
///
/// ```
/// use hillclimb_core::{LocalSearchProblem, Result};
/// use rand::Rng;
///
/// /// Walks a counter down to zero, one random step at a time.
/// #[derive(Clone, Debug, PartialEq)]
/// struct Countdown(usize);
///
/// impl LocalSearchProblem for Countdown {
///     fn create<R: Rng + ?Sized>(size: usize, _rng: &mut R) -> Result<Self> {
///         Ok(Countdown(size))
///     }
///
///     fn successor<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
///         if self.0 > 0 && rng.random_bool(0.5) {
///             Countdown(self.0 - 1)
///         } else {
///             self.clone()
///         }
///     }
///
///     fn is_objective(&self) -> bool {
///         self.0 == 0
///     }
///
///     fn heuristic(&self) -> usize {
///         self.0
///     }
/// }
///
/// let mut rng = rand::rng();
/// let state = Countdown::create(3, &mut rng).unwrap();
/// assert!(!state.is_objective());
/// assert!(state.successor(&mut rng).heuristic() <= 3);
/// ```
pub trait LocalSearchProblem: Clone + PartialEq + Debug + Send {
    /// Creates a random state of the given size.
    ///
    /// # Errors
    ///
    /// Returns an error if no state of `size` can be built.
    fn create<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self>;

    /// Produces the next state. Returning a value equal to `self` signals
    /// that no acceptable neighbor was found.
    fn successor<R: Rng + ?Sized>(&self, rng: &mut R) -> Self;

    /// Returns true if this state solves the problem.
    fn is_objective(&self) -> bool;

    /// Heuristic distance from an objective state, `0` when solved.
    ///
    /// Only used for reporting; the driver never steers on it.
    fn heuristic(&self) -> usize;
}
