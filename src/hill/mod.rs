//! Hill Climbing (HC).
//!
//! First-improvement ascent in the skill-reassignment neighborhood N¹.
//! Each outer iteration samples up to `sample_size` neighbors and moves to
//! the first one that strictly improves. A batch with no improving sample
//! is taken as a local optimum and ends the run.

mod config;
mod runner;

pub use config::HillConfig;
pub use runner::HillRunner;
