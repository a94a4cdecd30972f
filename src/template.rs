//! The specialization template.
//!
//! Template text is opaque: the only thing inspected is the set of
//! `{identifier}` slots it references, and `{qualifiers}` must be the only
//! one. The slot may appear more than once; every occurrence receives the
//! same qualifier string. Other braces (`{}`, `{ ... }`) are literal text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{Error, Result};

/// Name of the single substitution slot.
pub const QUALIFIERS_SLOT: &str = "qualifiers";

static SLOT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

/// Partial specialization of `function_info` for one pointer-to-member-function
/// qualifier set.
pub const FUNCTION_INFO_TEMPLATE: &str = r#"
/**
 * @brief      The partial specialization for qualifiers
               "{qualifiers}"
 *
 * @tparam     Ret      Type of the returned value
 * @tparam     Class    Object type
 * @tparam     Args     Type of the arguments
 */
template<typename Ret, typename Class, typename ... Args>
struct function_info<Ret(Class::*)(Args...) {qualifiers}>
    : method_function_info<Ret, Class, Args...> {};
"#;

/// Validated template text with one named slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecializationTemplate {
    text: String,
    slot_occurrences: usize,
}

impl SpecializationTemplate {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let mut slot_occurrences = 0;

        for captures in SLOT_PATTERN.captures_iter(&text) {
            let name = &captures[1];
            if name != QUALIFIERS_SLOT {
                return Err(Error::template(format!(
                    "unknown slot `{{{}}}`, only `{{{}}}` is supported",
                    name, QUALIFIERS_SLOT
                )));
            }
            slot_occurrences += 1;
        }

        if slot_occurrences == 0 {
            return Err(Error::template(format!(
                "template has no `{{{}}}` slot",
                QUALIFIERS_SLOT
            )));
        }

        Ok(Self {
            text,
            slot_occurrences,
        })
    }

    /// The built-in `function_info` template.
    pub fn function_info() -> Self {
        Self {
            text: FUNCTION_INFO_TEMPLATE.to_string(),
            slot_occurrences: 2,
        }
    }

    /// Substitute `qualifiers` into every slot occurrence.
    pub fn render(&self, qualifiers: &str) -> String {
        SLOT_PATTERN
            .replace_all(&self.text, regex::NoExpand(qualifiers))
            .into_owned()
    }

    pub fn slot_occurrences(&self) -> usize {
        self.slot_occurrences
    }
}

impl Default for SpecializationTemplate {
    fn default() -> Self {
        Self::function_info()
    }
}
