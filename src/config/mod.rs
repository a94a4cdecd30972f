//! Generator configuration.
//!
//! The built-in configuration ([`GeneratorConfig::default`]) is the complete
//! member-function qualifier set. [`GeneratorConfig::from_toml_str`] exists for
//! library users who need additional axes or a different template.

pub mod axes;
pub mod core;

pub use axes::{builtin_axes, CV_QUALIFIERS, NOEXCEPT_QUALIFIERS, REF_QUALIFIERS};
pub use self::core::GeneratorConfig;
