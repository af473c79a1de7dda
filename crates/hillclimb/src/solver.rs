//! N-Queens entry point that hides the driver wiring.

use std::path::Path;

use hillclimb_config::{ConfigError, SolverConfig, TerminationConfig};
use hillclimb_core::{HillClimbError, Result};
use hillclimb_nqueens::Board;
use hillclimb_solver::{SolveResult, Solver};
use tracing::warn;

/// Configuration file picked up from the working directory when no path
/// is given.
pub const DEFAULT_CONFIG_FILE: &str = "solver.toml";

/// Loads solver configuration.
///
/// With a path, that file must exist and be valid. Without one,
/// [`DEFAULT_CONFIG_FILE`] is read if it exists in the working directory,
/// otherwise defaults are used.
///
/// # Errors
///
/// Returns [`HillClimbError::Config`] if the file cannot be read, does not
/// parse or fails validation.
pub fn load_config(path: Option<&Path>) -> Result<SolverConfig> {
    let path = match path {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                return Ok(SolverConfig::default());
            }
            default
        }
    };

    SolverConfig::load(path).map_err(|e| config_error(path, e))
}

/// Searches for an N-Queens solution with the given configuration.
///
/// Terminations, seed and round length all come from `config`. Without a
/// termination the call returns only once a solution is found; for 2 and 3
/// queens none exists, so a warning is logged before the search starts.
///
/// # Errors
///
/// Returns [`HillClimbError::InvalidSize`] if `size` is zero and
/// [`HillClimbError::Config`] if `config` is invalid.
pub fn solve_nqueens(size: usize, config: &SolverConfig) -> Result<SolveResult<Board>> {
    if cannot_stop(size, config) {
        warn!(
            size = size as u64,
            "no solution exists for {size} queens and no termination is configured; the search will not stop",
        );
    }

    let mut solver = Solver::from_config(config)?;
    solver.solve::<Board>(size)
}

// True when no solution exists for `size` and nothing else ends the search.
fn cannot_stop(size: usize, config: &SolverConfig) -> bool {
    let unbounded = config
        .termination
        .as_ref()
        .map_or(true, TerminationConfig::is_unbounded);

    unbounded && (2..=3).contains(&size)
}

fn config_error(path: &Path, error: ConfigError) -> HillClimbError {
    HillClimbError::Config(format!("{}: {error}", path.display()))
}

#[cfg(test)]
mod tests;
