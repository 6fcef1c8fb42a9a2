use thiserror::Error;

/// Problem found by [`Pattern::validate`](crate::Pattern::validate).
///
/// Compilation itself never fails; a pattern with one of these problems still
/// compiles, but the affected matcher is disabled and never matches.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The conventional glob form of the pattern is malformed.
    #[error("invalid glob in filter pattern '{pattern}': {source}")]
    InvalidGlob {
        /// The cleaned pattern text.
        pattern: String,
        /// Error reported by the glob compiler.
        #[source]
        source: globset::Error,
    },
    /// The wildcard expression derived from the pattern could not be built.
    #[error("invalid wildcard expression for filter pattern '{pattern}': {source}")]
    InvalidRegex {
        /// The cleaned pattern text.
        pattern: String,
        /// Error reported by the regular expression compiler.
        #[source]
        source: regex::Error,
    },
}

impl PatternError {
    /// Returns the offending pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::InvalidGlob { pattern, .. } | Self::InvalidRegex { pattern, .. } => pattern,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PatternError;
    use globset::GlobBuilder;
    use std::error::Error as _;

    #[test]
    fn pattern_error_preserves_pattern_and_source() {
        let glob_err = GlobBuilder::new("[").build().unwrap_err();
        let error = PatternError::InvalidGlob {
            pattern: "[".into(),
            source: glob_err.clone(),
        };

        assert_eq!(error.pattern(), "[");
        assert!(error.to_string().contains("invalid glob"));
        assert!(error.source().is_some());
        assert_eq!(error.source().unwrap().to_string(), glob_err.to_string());
    }

    #[test]
    fn regex_error_display_names_pattern() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let error = PatternError::InvalidRegex {
            pattern: "a/**(".into(),
            source: regex_err,
        };

        assert_eq!(error.pattern(), "a/**(");
        assert!(error.to_string().contains("a/**("));
    }
}
