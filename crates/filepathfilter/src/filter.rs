use std::iter;

use crate::Pattern;
use crate::clean::{self, SEPARATOR};
use crate::debug_filter::{trace_filter_decision, trace_filter_evaluate, trace_prefix_decision};

/// Ordered include and exclude pattern lists with allow/deny decisions.
///
/// A path is allowed when it matches at least one include pattern (or there
/// are none) and no exclude pattern. Both lists are tested in declaration
/// order and the first pattern that matches is reported as the deciding
/// rule.
///
/// The empty filter, which is also [`Filter::default`], allows everything.
/// An absent filter is expressed as `None` through the [`PathFilter`]
/// implementation for `Option`.
///
/// A `Filter` is immutable once built and is safe to share between threads.
///
/// # Examples
///
/// ```
/// use filepathfilter::Filter;
///
/// let filter = Filter::new(["*.go"], ["*_test.go"]);
///
/// assert!(filter.allows("cmd/main.go"));
/// assert!(!filter.allows("cmd/main_test.go"));
/// assert!(!filter.allows("scripts/build.py"));
/// assert_eq!(filter.allows_pattern("cmd/main_test.go"), ("*_test.go", false));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Filter {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl Filter {
    /// Compiles raw include and exclude patterns into a filter.
    pub fn new<I, E>(include: I, exclude: E) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self::from_patterns(compile_all(include), compile_all(exclude))
    }

    /// Builds a filter from already compiled patterns.
    #[must_use]
    pub const fn from_patterns(include: Vec<Pattern>, exclude: Vec<Pattern>) -> Self {
        Self { include, exclude }
    }

    /// Returns `true` if the filter has neither include nor exclude patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Returns the canonical text of each include pattern.
    #[must_use]
    pub fn include(&self) -> Vec<String> {
        pattern_strings(&self.include)
    }

    /// Returns the canonical text of each exclude pattern.
    #[must_use]
    pub fn exclude(&self) -> Vec<String> {
        pattern_strings(&self.exclude)
    }

    /// Returns the compiled include patterns.
    #[must_use]
    pub fn include_patterns(&self) -> &[Pattern] {
        &self.include
    }

    /// Returns the compiled exclude patterns.
    #[must_use]
    pub fn exclude_patterns(&self) -> &[Pattern] {
        &self.exclude
    }

    /// Returns `true` if `path` passes the filter.
    #[must_use]
    pub fn allows(&self, path: &str) -> bool {
        self.allows_pattern(path).1
    }

    /// Returns the deciding pattern and whether `path` passes the filter.
    ///
    /// `path` is cleaned before matching. When includes exist and none of
    /// them match, the path is rejected without consulting the excludes and
    /// the returned pattern is empty. Otherwise the first matching exclude
    /// rejects the path and is returned; if none matches, the path is allowed
    /// and the matching include (or the empty string when there are no
    /// includes) is returned.
    #[must_use]
    pub fn allows_pattern(&self, path: &str) -> (&str, bool) {
        if self.is_empty() {
            return ("", true);
        }

        let cleaned = clean::clean(path);
        let mut rule = "";

        if !self.include.is_empty() {
            match first_match(&self.include, &cleaned, true) {
                Some(pattern) => rule = pattern.as_str(),
                None => {
                    trace_filter_decision(&cleaned, false, "");
                    return ("", false);
                }
            }
        }

        if let Some(pattern) = first_match(&self.exclude, &cleaned, false) {
            trace_filter_decision(&cleaned, false, pattern.as_str());
            return (pattern.as_str(), false);
        }

        trace_filter_decision(&cleaned, true, rule);
        (rule, true)
    }

    /// Returns `true` if some path below the directory `prefix` could still
    /// be allowed.
    ///
    /// Candidates are `prefix` itself followed by each of its ancestors,
    /// longest first. An exclude matching any candidate prunes the whole
    /// branch immediately. Otherwise the first candidate accepted by an
    /// include pattern's prefix test (or any candidate when there are no
    /// includes) keeps the branch alive.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        let plausible = self.prefix_plausible(prefix);
        trace_prefix_decision(prefix, plausible);
        plausible
    }

    fn prefix_plausible(&self, prefix: &str) -> bool {
        let ends = iter::once(prefix.len()).chain(prefix.rmatch_indices(SEPARATOR).map(|(i, _)| i));

        for end in ends {
            let candidate = &prefix[..end];

            if self.exclude.iter().any(|pattern| pattern.matches(candidate)) {
                break;
            }
            if self.include.is_empty() {
                return true;
            }
            if self.include.iter().any(|pattern| pattern.has_prefix(candidate)) {
                return true;
            }
        }
        false
    }
}

/// Allow/deny queries shared by [`Filter`] and optional filters.
///
/// `None` stands for "no filter configured" and allows every path and every
/// prefix.
///
/// ```
/// use filepathfilter::{Filter, PathFilter};
///
/// let absent: Option<Filter> = None;
/// assert!(absent.allows("anything/at/all"));
/// assert!(absent.has_prefix("anything"));
/// assert_eq!(absent.allows_pattern("x"), ("", true));
/// ```
pub trait PathFilter {
    /// Returns the deciding pattern and whether `path` passes.
    fn allows_pattern(&self, path: &str) -> (&str, bool);

    /// Returns `true` if some path below `prefix` could pass.
    fn has_prefix(&self, prefix: &str) -> bool;

    /// Returns `true` if `path` passes.
    fn allows(&self, path: &str) -> bool {
        self.allows_pattern(path).1
    }
}

impl PathFilter for Filter {
    fn allows_pattern(&self, path: &str) -> (&str, bool) {
        Self::allows_pattern(self, path)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        Self::has_prefix(self, prefix)
    }
}

impl<F: PathFilter + ?Sized> PathFilter for &F {
    fn allows_pattern(&self, path: &str) -> (&str, bool) {
        (**self).allows_pattern(path)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        (**self).has_prefix(prefix)
    }
}

impl<F: PathFilter> PathFilter for Option<F> {
    fn allows_pattern(&self, path: &str) -> (&str, bool) {
        match self {
            Some(filter) => filter.allows_pattern(path),
            None => ("", true),
        }
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        self.as_ref().is_none_or(|filter| filter.has_prefix(prefix))
    }
}

fn compile_all<I>(raw: I) -> Vec<Pattern>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    raw.into_iter()
        .map(|pattern| Pattern::new(pattern.as_ref()))
        .collect()
}

fn pattern_strings(patterns: &[Pattern]) -> Vec<String> {
    patterns.iter().map(|pattern| pattern.as_str().to_owned()).collect()
}

fn first_match<'a>(patterns: &'a [Pattern], path: &str, is_include: bool) -> Option<&'a Pattern> {
    patterns.iter().find(|pattern| {
        let matched = pattern.matches(path);
        trace_filter_evaluate(path, pattern.as_str(), is_include, matched);
        matched
    })
}
