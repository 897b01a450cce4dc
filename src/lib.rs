//! Multiple team formation optimization.
//!
//! Assigns H persons, each holding exactly one skill, to P concurrent
//! projects at discrete dedication levels so that every project's skill
//! requirements are met, nobody is over-committed, and the affinity
//! between team members is maximized.
//!
//! All search strategies share one move: rebuild the allocation of a single
//! skill group from scratch ([`neighborhood::reassign_skill_group`]). Since
//! a person holds one skill, groups never compete for capacity and any move
//! keeps every person within their capacity.
//!
//! - **Local Search (LS)**: bounded first-accept ascent in N¹.
//! - **Hill Climbing (HC)**: sampled first-improvement ascent that stops at
//!   a local optimum.
//! - **Tabu Search (TS)**: skill-level short-term memory with aspiration
//!   and periodic restarts.
//! - **Variable Neighborhood Search (VNS)**: shakes of growing size
//!   followed by short Local Search.
//! - **Random Search (RS)** and a deterministic **Greedy** baseline.
//! - **Genetic operators**: skill-block sampling, crossover and mutation for
//!   an external evolutionary driver.
//!
//! # Architecture
//!
//! [`model`] holds the validated instance and the evaluation; every
//! strategy works on the level-index encoding ([`model::Genes`]) and
//! returns a [`result::SolveResult`]. [`batch`] runs many seeded strategy
//! runs side by side for benchmarking.

pub mod batch;
mod clamp;
pub mod ga;
pub mod generator;
pub mod greedy;
pub mod hill;
pub mod ls;
pub mod model;
pub mod neighborhood;
pub mod random_search;
pub mod result;
pub mod rng;
pub mod tabu;
pub mod vns;
