//! Shared error types for qualgen.
//!
//! Only one failure is expected at runtime: the output stream refusing a
//! write. The remaining variants guard the library-level configuration
//! surface, where axes and template text can come from outside the crate.

use thiserror::Error;

/// Main error type for qualgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// The output stream could not be written to
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Template slot validation errors
    #[error("Template error: {0}")]
    Template(String),

    /// Axis configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// TOML configuration could not be parsed
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a template error
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template(message.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether this error came from the output stream
    pub fn is_output_fault(&self) -> bool {
        matches!(self, Self::Output(_))
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
