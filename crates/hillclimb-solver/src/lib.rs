//! hillclimb Solver Engine
//!
//! This crate provides the hill-climbing driver including:
//! - Solver and solve results
//! - The hill-climbing phase (round loop)
//! - Termination conditions
//! - Scopes holding the search state and the random source
//!
//! The driver is generic over [`hillclimb_core::LocalSearchProblem`].

pub mod phase;
pub mod scope;
pub mod solver;
pub mod termination;

pub use phase::HillClimbingPhase;
pub use scope::{RoundScope, SolverScope};
pub use solver::{ConfiguredTermination, SolveResult, SolveStatus, Solver};
pub use termination::{
    AndTermination, ExternalTermination, NoTermination, OrTermination, RoundCountTermination,
    StepCountTermination, Termination, TimeTermination,
};
