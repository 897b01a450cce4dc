//! Variable Neighborhood Search (VNS).
//!
//! Systematically widens the perturbation: neighborhood N^k rebuilds `k`
//! distinct skills at once. After each shake a short Local Search
//! ([`ls::improve`](crate::ls::improve)) intensifies; an improvement resets
//! `k` to 1, a failure widens it, wrapping back to 1 past the number of
//! skills.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.

mod config;
mod runner;

pub use config::VnsConfig;
pub use runner::{shake, VnsRunner};
