//! hillclimb Core - Core types and traits for local search
//!
//! This crate provides the fundamental abstractions shared by the solver
//! and the problem crates:
//! - [`LocalSearchProblem`], the capability set a state must offer to be
//!   searched by the hill-climbing driver
//! - [`HillClimbError`], the error type for every fallible operation

pub mod error;
pub mod problem;

pub use error::{HillClimbError, Result};
pub use problem::LocalSearchProblem;
