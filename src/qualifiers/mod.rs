//! Qualifier axes, their cartesian product, and qualifier-string formatting.
//!
//! - [`axis`]: an ordered set of tokens for one qualifier kind
//! - [`combination`]: one token per axis, and the lazy product iterator
//! - [`format`]: joins a combination into its canonical qualifier string

pub mod axis;
pub mod combination;
pub mod format;

pub use axis::QualifierAxis;
pub use combination::{combinations, product_len, Combination, Combinations};
pub use format::{format_qualifiers, format_tokens};
