//! Solver phases.

mod hill_climbing;

pub use hill_climbing::HillClimbingPhase;
