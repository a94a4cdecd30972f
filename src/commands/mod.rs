//! CLI command implementations.
//!
//! - **generate**: emit one specialization block per qualifier combination

pub mod generate;

pub use generate::{generate, generate_to, run_generate};
