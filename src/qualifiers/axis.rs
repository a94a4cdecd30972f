use serde::{Deserialize, Serialize};

/// The token that stands for "qualifier absent" on every axis.
pub const ABSENT: &str = "";

/// One independent qualifier dimension, e.g. cv-qualification.
///
/// Token order is enumeration order. Exactly one token is [`ABSENT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifierAxis {
    /// Diagnostic name, never rendered
    pub name: String,
    /// Ordered tokens, including the empty one
    pub tokens: Vec<String>,
}

impl QualifierAxis {
    pub fn new<I, S>(name: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index` in enumeration order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn token(&self, index: usize) -> &str {
        &self.tokens[index]
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn has_absent_token(&self) -> bool {
        self.tokens().any(|token| token == ABSENT)
    }
}
