//! Qualifier string formatting.
//!
//! Non-empty tokens are joined with single spaces in axis order; the result
//! never starts or ends with a space. Axis order already matches the
//! declarator grammar (cv, then ref, then noexcept), so tokens are never
//! reordered here.

use super::combination::Combination;

/// Canonical qualifier string for `combination`.
///
/// The all-absent combination yields `""`.
pub fn format_qualifiers(combination: &Combination<'_>) -> String {
    format_tokens(combination.tokens().iter().copied())
}

/// Join the non-empty `tokens` with single spaces.
pub fn format_tokens<'t>(tokens: impl IntoIterator<Item = &'t str>) -> String {
    tokens
        .into_iter()
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
