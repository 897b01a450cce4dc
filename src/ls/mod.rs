//! Local Search (LS).
//!
//! Bounded-iteration hill climbing in the skill-reassignment neighborhood
//! N¹: draw a random skill, rebuild its group, keep the neighbor only if it
//! strictly improves. The search never stops early on stagnation; it spends
//! its full iteration budget.
//!
//! [`improve`] is the reusable improvement subroutine, also used as the
//! intensification step of [`vns`](crate::vns).

mod config;
mod runner;

pub use config::LsConfig;
pub use runner::{improve, Improvement, LsRunner};
