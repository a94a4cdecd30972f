//! Diagnostics for the generator.
//!
//! Logging goes to stderr; stdout carries only generated specializations.

pub mod tracing;

pub use self::tracing::{init_tracing, LOG_ENV_VAR};
