//! A problem stuck on a plateau from the very first state.

use hillclimb_core::{LocalSearchProblem, Result};
use rand::Rng;

/// State whose successor is always itself and which is never objective.
///
/// `id` is the first random value drawn at creation, so a test can tell
/// whether the driver ever replaced the initial state with a fresh one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plateau {
    pub id: u64,
    pub size: usize,
}

impl LocalSearchProblem for Plateau {
    fn create<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        Ok(Self {
            id: rng.random(),
            size,
        })
    }

    fn successor<R: Rng + ?Sized>(&self, _rng: &mut R) -> Self {
        self.clone()
    }

    fn is_objective(&self) -> bool {
        false
    }

    fn heuristic(&self) -> usize {
        self.size
    }
}
