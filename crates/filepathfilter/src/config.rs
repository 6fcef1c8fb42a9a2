//! Serializable include/exclude configuration.

use crate::{Filter, Pattern, PatternError};

/// Raw include and exclude pattern lists, as they appear in configuration.
///
/// Missing lists default to empty, so `{}` describes the permissive filter.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterConfig {
    /// Patterns a path must match one of, when non-empty.
    pub include: Vec<String>,
    /// Patterns that reject a path.
    pub exclude: Vec<String>,
}

impl FilterConfig {
    /// Runs [`Pattern::validate`] over every configured pattern, includes
    /// first.
    ///
    /// # Errors
    ///
    /// Returns the first [`PatternError`] encountered.
    pub fn validate(&self) -> Result<(), PatternError> {
        self.include
            .iter()
            .chain(&self.exclude)
            .try_for_each(|raw| Pattern::validate(raw))
    }

    /// Compiles the configuration into a [`Filter`].
    #[must_use]
    pub fn build(&self) -> Filter {
        Filter::new(&self.include, &self.exclude)
    }
}

impl From<FilterConfig> for Filter {
    fn from(config: FilterConfig) -> Self {
        config.build()
    }
}

impl From<&FilterConfig> for Filter {
    fn from(config: &FilterConfig) -> Self {
        config.build()
    }
}

impl Filter {
    /// Returns the configuration that rebuilds this filter.
    ///
    /// Patterns are reported in their cleaned form.
    #[must_use]
    pub fn to_config(&self) -> FilterConfig {
        FilterConfig {
            include: self.include(),
            exclude: self.exclude(),
        }
    }
}
