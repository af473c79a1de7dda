//! Shared test fixtures for hillclimb crates.
//!
//! This crate provides small problems with fully predictable search
//! behavior, plus N-Queens helpers. It does NOT depend on
//! `hillclimb-solver` so the solver can use it as a dev-dependency.
//!
//! - [`countdown`] - a state that walks straight down to its objective
//! - [`plateau`] - a state that never moves and is never solved
//! - [`wander`] - a state that always moves and is never solved
//! - [`nqueens`] - known boards, permutation checks and seeded RNGs
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! hillclimb-test = { workspace = true }
//! ```

pub mod countdown;
pub mod nqueens;
pub mod plateau;
pub mod wander;

// Re-export commonly used types at crate root for convenience
pub use countdown::Countdown;
pub use nqueens::{assert_permutation, seeded_rng, FOUR_QUEENS_SOLUTIONS};
pub use plateau::Plateau;
pub use wander::Wander;
