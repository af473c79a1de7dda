//! Solver implementation.
//!
//! Logging levels:
//! - **INFO**: Solver start/end with seed, rounds, steps and heuristic

use std::fmt::{self, Debug};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use hillclimb_config::{SolverConfig, DEFAULT_ROUND_LENGTH_FACTOR};
use hillclimb_core::{HillClimbError, LocalSearchProblem, Result};
use tracing::info;

use crate::phase::HillClimbingPhase;
use crate::scope::SolverScope;
use crate::termination::{
    NoTermination, OrTermination, RoundCountTermination, StepCountTermination, Termination,
    TimeTermination,
};

/// Termination assembled from a [`SolverConfig`]: the first configured
/// limit reached stops the search.
pub type ConfiguredTermination = OrTermination<(
    Option<TimeTermination>,
    Option<RoundCountTermination>,
    Option<StepCountTermination>,
)>;

/// How a solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// The final state is objective.
    Solved,
    /// A termination stopped the search before an objective state was found.
    Terminated,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Solved => f.write_str("solved"),
            SolveStatus::Terminated => f.write_str("terminated"),
        }
    }
}

/// Final state of a solve plus run statistics.
#[derive(Debug, Clone)]
pub struct SolveResult<P> {
    /// The last current state of the search.
    pub state: P,
    pub status: SolveStatus,
    /// Seed of the random source; rerunning with it reproduces the search.
    pub seed: u64,
    pub round_count: u64,
    pub step_count: u64,
    pub stuck_round_count: u64,
    pub elapsed: Duration,
}

impl<P: LocalSearchProblem> SolveResult<P> {
    /// Returns true if the search reached an objective state.
    pub fn is_solved(&self) -> bool {
        self.status == SolveStatus::Solved
    }

    /// Returns the heuristic of the final state.
    pub fn heuristic(&self) -> usize {
        self.state.heuristic()
    }
}

/// The hill-climbing solver.
///
/// # Type Parameters
/// * `T` - Termination condition ([`NoTermination`] by default)
///
/// # Example
///
/// ```
/// use hillclimb_nqueens::Board;
/// use hillclimb_solver::{RoundCountTermination, Solver};
///
/// let mut solver = Solver::new()
///     .with_random_seed(42)
///     .with_termination(RoundCountTermination::new(10_000));
///
/// let result = solver.solve::<Board>(8).unwrap();
/// if result.is_solved() {
///     assert_eq!(result.state.conflict_count(), 0);
/// }
/// ```
pub struct Solver<T = NoTermination> {
    phase: HillClimbingPhase,
    termination: T,
    random_seed: Option<u64>,
}

impl Solver<NoTermination> {
    /// Creates a solver that searches until it finds an objective state.
    pub fn new() -> Self {
        Solver {
            phase: HillClimbingPhase::new(DEFAULT_ROUND_LENGTH_FACTOR),
            termination: NoTermination,
            random_seed: None,
        }
    }
}

impl Default for Solver<NoTermination> {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver<ConfiguredTermination> {
    /// Builds a solver from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HillClimbError::Config`] if the configuration is invalid.
    pub fn from_config(config: &SolverConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| HillClimbError::Config(e.to_string()))?;

        let termination = config.termination.clone().unwrap_or_default();
        let configured = OrTermination((
            termination.time_limit().map(TimeTermination::new),
            termination.round_count_limit.map(RoundCountTermination::new),
            termination.step_count_limit.map(StepCountTermination::new),
        ));

        Ok(Solver {
            phase: HillClimbingPhase::new(config.hill_climbing.round_length_factor),
            termination: configured,
            random_seed: config.random_seed,
        })
    }
}

impl<T> Solver<T> {
    /// Sets the termination condition.
    pub fn with_termination<U>(self, termination: U) -> Solver<U> {
        Solver {
            phase: self.phase,
            termination,
            random_seed: self.random_seed,
        }
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the number of successor requests per unit of size in one round.
    pub fn with_round_length_factor(mut self, factor: usize) -> Self {
        self.phase = HillClimbingPhase::new(factor);
        self
    }

    /// Returns the configured seed, if any.
    pub fn random_seed(&self) -> Option<u64> {
        self.random_seed
    }

    /// Searches for an objective state of the given size.
    ///
    /// Without a termination this only returns once a solution is found,
    /// which may be never.
    ///
    /// # Errors
    ///
    /// Returns [`HillClimbError::InvalidSize`] if `size` is zero,
    /// [`HillClimbError::Config`] if the round length factor is zero, and
    /// any error from creating the initial state.
    pub fn solve<P>(&mut self, size: usize) -> Result<SolveResult<P>>
    where
        P: LocalSearchProblem,
        T: Termination<P>,
    {
        if size == 0 {
            return Err(HillClimbError::InvalidSize { size });
        }
        if self.phase.round_length_factor() == 0 {
            return Err(HillClimbError::Config(
                "round length factor must be greater than zero".to_string(),
            ));
        }

        let round_length = self.phase.round_length(size);
        let seed = self.random_seed.unwrap_or_else(time_seed);
        let mut solver_scope = SolverScope::<P>::create(size, seed)?;

        info!(
            event = "solve_start",
            size = size as u64,
            seed = seed,
            round_length = round_length as u64,
            heuristic = solver_scope.current().heuristic() as u64,
        );

        let status = self
            .phase
            .solve(size, &mut solver_scope, &self.termination);

        let elapsed = solver_scope.elapsed();
        let round_count = solver_scope.round_count();
        let step_count = solver_scope.step_count();
        let stuck_round_count = solver_scope.stuck_round_count();
        let state = solver_scope.into_current();

        info!(
            event = "solve_end",
            status = %status,
            rounds = round_count,
            steps = step_count,
            stuck_rounds = stuck_round_count,
            duration_ms = elapsed.as_millis() as u64,
            heuristic = state.heuristic() as u64,
            solved = status == SolveStatus::Solved,
        );

        Ok(SolveResult {
            state,
            status,
            seed,
            round_count,
            step_count,
            stuck_round_count,
            elapsed,
        })
    }
}

impl<T: Debug> Debug for Solver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solver")
            .field("phase", &self.phase)
            .field("termination", &self.termination)
            .field("random_seed", &self.random_seed)
            .finish()
    }
}

// Seed for runs without a configured one, taken from the wall clock.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
