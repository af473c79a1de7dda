//! A problem that reaches its objective in exactly `size` moves.

use hillclimb_core::{LocalSearchProblem, Result};
use rand::Rng;

/// Counter that every successor decrements by one until it hits zero.
///
/// Solving a `Countdown` of size `n` takes one round of `n` accepted
/// steps, after which the successor repeats the state and the round
/// ends early.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Countdown {
    pub remaining: usize,
}

impl LocalSearchProblem for Countdown {
    fn create<R: Rng + ?Sized>(size: usize, _rng: &mut R) -> Result<Self> {
        Ok(Self { remaining: size })
    }

    fn successor<R: Rng + ?Sized>(&self, _rng: &mut R) -> Self {
        Self {
            remaining: self.remaining.saturating_sub(1),
        }
    }

    fn is_objective(&self) -> bool {
        self.remaining == 0
    }

    fn heuristic(&self) -> usize {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeded_rng;

    #[test]
    fn test_countdown_reaches_zero() {
        let mut rng = seeded_rng(0);
        let mut state = Countdown::create(3, &mut rng).unwrap();
        for expected in [2, 1, 0, 0] {
            state = state.successor(&mut rng);
            assert_eq!(state.remaining, expected);
        }
        assert!(state.is_objective());
    }
}
