//! Genetic operators for the team-formation encoding.
//!
//! Batch-oriented sampling, crossover and mutation that an external
//! evolutionary driver can plug in. All operators work on whole skill
//! groups, so offspring of capacity-feasible parents stay capacity-feasible.
//!
//! # Operators
//!
//! - [`sample_population`]: constructive initial individuals
//! - [`block_crossover`]: uniform crossover over skill blocks
//! - [`block_mutation`]: rebuild one random skill group
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

mod config;
pub mod operators;

pub use config::GaOperatorConfig;
pub use operators::{block_crossover, block_mutation, sample_population};
