//! Tabu Search (TS).
//!
//! A trajectory metaheuristic over the skill-reassignment neighborhood N¹.
//! Recently rebuilt skills are held in a short FIFO memory and may not be
//! rebuilt again unless the move beats the global best (aspiration). The
//! search periodically restarts from a fresh constructive solution while
//! keeping the global best.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod runner;

pub use config::TabuConfig;
pub use memory::TabuMemory;
pub use runner::TabuRunner;
