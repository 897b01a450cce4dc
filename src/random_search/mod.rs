//! Random Search (RS).
//!
//! Baseline strategy: draw independent constructive solutions and keep the
//! best. Useful as a lower bound for the trajectory methods at an equal
//! evaluation budget.

mod config;
mod runner;

pub use config::RandomConfig;
pub use runner::RandomRunner;
