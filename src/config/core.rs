use serde::{Deserialize, Serialize};

use super::axes::builtin_axes;
use crate::errors::{Error, Result};
use crate::qualifiers::{combinations, product_len, Combinations, QualifierAxis};
use crate::template::{SpecializationTemplate, FUNCTION_INFO_TEMPLATE};

/// Root configuration for a generation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Qualifier axes, outermost first
    pub axes: Vec<QualifierAxis>,

    /// Specialization template text with a `{qualifiers}` slot
    #[serde(default = "default_template")]
    pub template: String,
}

fn default_template() -> String {
    FUNCTION_INFO_TEMPLATE.to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            axes: builtin_axes(),
            template: default_template(),
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate configuration from a TOML document.
    ///
    /// ```toml
    /// [[axes]]
    /// name = "cv"
    /// tokens = ["", "const"]
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        tracing::debug!(axes = config.axes.len(), "Loaded generator config");
        Ok(config)
    }

    /// Check every axis, the product size, and the template.
    pub fn validate(&self) -> Result<()> {
        self.axes.iter().try_for_each(validate_axis)?;
        if product_len(&self.axes).is_none() {
            return Err(Error::configuration(format!(
                "{} axes produce more combinations than can be enumerated",
                self.axes.len()
            )));
        }
        self.specialization_template().map(|_| ())
    }

    /// Every combination of the configured axes, in emission order.
    pub fn combinations(&self) -> Combinations<'_> {
        combinations(&self.axes)
    }

    pub fn specialization_template(&self) -> Result<SpecializationTemplate> {
        SpecializationTemplate::new(self.template.clone())
    }
}

fn validate_axis(axis: &QualifierAxis) -> Result<()> {
    if axis.is_empty() {
        return Err(Error::configuration(format!(
            "axis `{}` has no tokens",
            axis.name
        )));
    }

    // A second empty token is caught by the duplicate check below
    if !axis.has_absent_token() {
        return Err(Error::configuration(format!(
            "axis `{}` must contain an empty token",
            axis.name
        )));
    }

    for (index, token) in axis.tokens().enumerate() {
        if token != token.trim() || token.contains("  ") {
            return Err(Error::configuration(format!(
                "axis `{}` token {:?} has stray whitespace",
                axis.name, token
            )));
        }
        if axis.tokens().skip(index + 1).any(|other| other == token) {
            return Err(Error::configuration(format!(
                "axis `{}` repeats token {:?}",
                axis.name, token
            )));
        }
    }

    Ok(())
}
