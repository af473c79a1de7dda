//! Solver-level scope.

use std::time::{Duration, Instant};

use hillclimb_core::LocalSearchProblem;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Top-level scope for the entire solving process.
///
/// Owns the single current state; a new state replaces the old one, there
/// is never a second live copy held by the driver.
pub struct SolverScope<P: LocalSearchProblem> {
    current: P,
    rng: StdRng,
    seed: u64,
    start_time: Instant,
    round_count: u64,
    step_count: u64,
    stuck_round_count: u64,
}

impl<P: LocalSearchProblem> SolverScope<P> {
    /// Creates a scope around an initial state and the RNG that built it.
    pub fn new(initial: P, rng: StdRng, seed: u64) -> Self {
        Self {
            current: initial,
            rng,
            seed,
            start_time: Instant::now(),
            round_count: 0,
            step_count: 0,
            stuck_round_count: 0,
        }
    }

    /// Seeds a fresh RNG, creates the initial state of `size` from it, and
    /// wraps both in a scope.
    pub fn create(size: usize, seed: u64) -> hillclimb_core::Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = P::create(size, &mut rng)?;
        Ok(Self::new(initial, rng, seed))
    }

    pub fn current(&self) -> &P {
        &self.current
    }

    pub fn into_current(self) -> P {
        self.current
    }

    /// Asks the current state for a successor using the scope's RNG.
    pub fn propose_successor(&mut self) -> P {
        self.current.successor(&mut self.rng)
    }

    pub(crate) fn replace_current(&mut self, next: P) {
        self.current = next;
        self.step_count += 1;
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn round_count(&self) -> u64 {
        self.round_count
    }

    pub(crate) fn increment_round_count(&mut self, stuck: bool) -> u64 {
        self.round_count += 1;
        if stuck {
            self.stuck_round_count += 1;
        }
        self.round_count
    }

    /// Number of accepted successors over the whole solve.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Number of rounds that ended because the successor repeated the state.
    pub fn stuck_round_count(&self) -> u64 {
        self.stuck_round_count
    }
}
