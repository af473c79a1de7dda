//! A problem that keeps moving without ever being solved.

use hillclimb_core::{LocalSearchProblem, Result};
use rand::Rng;

/// Position on a ring of `size` cells; every successor steps one cell on.
///
/// Because the successor always differs from the current state, every
/// round runs to its full length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wander {
    pub position: usize,
    pub size: usize,
}

impl LocalSearchProblem for Wander {
    fn create<R: Rng + ?Sized>(size: usize, _rng: &mut R) -> Result<Self> {
        Ok(Self { position: 0, size })
    }

    fn successor<R: Rng + ?Sized>(&self, _rng: &mut R) -> Self {
        Self {
            position: (self.position + 1) % self.size.max(2),
            size: self.size,
        }
    }

    fn is_objective(&self) -> bool {
        false
    }

    fn heuristic(&self) -> usize {
        1
    }
}
