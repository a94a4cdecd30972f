// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;
pub mod observability;
pub mod qualifiers;
pub mod template;

// Re-export commonly used types
pub use crate::commands::{generate, generate_to};
pub use crate::config::GeneratorConfig;
pub use crate::errors::{Error, Result};
pub use crate::io::{SpecializationEmitter, SpecializationWriter};
pub use crate::qualifiers::{combinations, format_qualifiers, Combination, QualifierAxis};
pub use crate::template::SpecializationTemplate;
