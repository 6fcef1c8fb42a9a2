use std::fmt;

use regex::Regex;

use crate::clean::{self, SEPARATOR};
use crate::debug_filter::{trace_pattern_compiled, trace_pattern_degraded};
use crate::glob::{self, ExactGlob, SegmentGlob};
use crate::{PatternError, PatternKind};

/// Patterns that refer to the local directory and therefore match everything.
const LOCAL_DIR_PATTERNS: [&str; 5] = ["*", "*.*", ".", "./", ".\\"];

/// Compiled, immutable matching rule.
///
/// A `Pattern` is built once from a gitignore-flavoured string and answers
/// two questions about cleaned, root-relative paths:
///
/// - [`matches`](Self::matches): does the rule match this full path?
/// - [`has_prefix`](Self::has_prefix): could the rule match some path below
///   this directory prefix?
///
/// The raw string is classified into exactly one [`PatternKind`] at
/// construction, and each kind keeps only the state its algorithm needs.
/// Compilation is total: every string yields a pattern.
///
/// # Examples
///
/// ```
/// use filepathfilter::{Pattern, PatternKind};
///
/// let pattern = Pattern::new("*.txt");
/// assert_eq!(pattern.kind(), PatternKind::SimpleExtension);
/// assert!(pattern.matches("dir/sub/a.txt"));
/// assert!(!pattern.matches("a.txtx"));
/// assert_eq!(pattern.as_str(), "*.txt");
/// ```
#[derive(Clone, Debug)]
pub struct Pattern {
    text: String,
    matcher: Matcher,
}

#[derive(Clone, Debug)]
enum Matcher {
    NoOp,
    SimpleExtension {
        ext: String,
    },
    DoubleWildcard {
        glob: ExactGlob,
        wildcard: Option<Regex>,
        literal: String,
    },
    PathlessWildcard {
        glob: ExactGlob,
        wildcard: Option<Regex>,
    },
    PathfulWildcard {
        glob: ExactGlob,
        components: Vec<SegmentGlob>,
    },
    PathPrefix {
        glob: ExactGlob,
        relative: String,
        prefix: String,
    },
    PlainPath {
        glob: ExactGlob,
        prefix: String,
        suffix: String,
        inner: String,
    },
}

impl Pattern {
    /// Compiles `raw` into the matcher variant its shape calls for.
    ///
    /// The string is cleaned first (redundant separators, `.` and `..`
    /// collapsed), so `a//b/` and `a/b` compile to the same rule.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let text = clean::clean(raw);
        let kind = classify(&text);
        trace_pattern_compiled(&text, kind);
        let matcher = Matcher::compile(kind, &text);
        Self { text, matcher }
    }

    /// Checks that every matcher `raw` compiles into is usable.
    ///
    /// [`Pattern::new`] accepts anything and silently disables a glob or
    /// wildcard expression that fails to build. Callers loading patterns from
    /// user configuration can use this to report such typos instead.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidGlob`] when the conventional glob form
    /// is malformed, or [`PatternError::InvalidRegex`] when the derived
    /// wildcard expression cannot be compiled.
    pub fn validate(raw: &str) -> Result<(), PatternError> {
        let text = clean::clean(raw);
        let kind = classify(&text);

        if uses_glob(kind) {
            glob::build(&text).map_err(|source| PatternError::InvalidGlob {
                pattern: text.clone(),
                source,
            })?;
        }
        if let Some(expr) = wildcard_expression(kind, &text) {
            Regex::new(&expr).map_err(|source| PatternError::InvalidRegex {
                pattern: text.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Returns the variant selected for this pattern.
    #[must_use]
    pub fn kind(&self) -> PatternKind {
        match self.matcher {
            Matcher::NoOp => PatternKind::NoOp,
            Matcher::SimpleExtension { .. } => PatternKind::SimpleExtension,
            Matcher::DoubleWildcard { .. } => PatternKind::DoubleWildcard,
            Matcher::PathlessWildcard { .. } => PatternKind::PathlessWildcard,
            Matcher::PathfulWildcard { .. } => PatternKind::PathfulWildcard,
            Matcher::PathPrefix { .. } => PatternKind::PathPrefix,
            Matcher::PlainPath { .. } => PatternKind::PlainPath,
        }
    }

    /// Returns the canonical (cleaned) text of the pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the rule matches the full path `name`.
    ///
    /// `name` is expected to be cleaned already; [`Filter`](crate::Filter)
    /// takes care of that for its callers.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match &self.matcher {
            Matcher::NoOp => true,
            Matcher::SimpleExtension { ext } => name.ends_with(ext.as_str()),
            Matcher::DoubleWildcard { glob, wildcard, .. } => {
                glob.is_match(name) || wildcard_matches(wildcard.as_ref(), name)
            }
            Matcher::PathlessWildcard { glob, wildcard } => {
                // Unanchored: only the final component has to match.
                glob.is_match(name) || wildcard_matches(wildcard.as_ref(), clean::base(name))
            }
            Matcher::PathfulWildcard { glob, components } => {
                let partial = PartialMatch::of(components, name);
                partial.is_complete(components.len()) || glob.is_match(name)
            }
            Matcher::PathPrefix {
                glob,
                relative,
                prefix,
            } => {
                name == relative.as_str()
                    || name.starts_with(prefix.as_str())
                    || glob.is_match(name)
            }
            Matcher::PlainPath {
                glob,
                prefix,
                suffix,
                inner,
            } => {
                name == self.text
                    || name.starts_with(prefix.as_str())
                    || name.ends_with(suffix.as_str())
                    || name.contains(inner.as_str())
                    || glob.is_match(name)
            }
        }
    }

    /// Returns `true` if the rule could match some path that has `prefix` as
    /// a leading path.
    ///
    /// For a rule matching `a/b/c.txt` this holds for `a` and `a/b`. A `false`
    /// answer means no path below `prefix` can match, so a walker may skip
    /// the whole subtree.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        match &self.matcher {
            // Extension and base-name rules can fire at any depth.
            Matcher::NoOp | Matcher::SimpleExtension { .. } | Matcher::PathlessWildcard { .. } => {
                true
            }
            Matcher::DoubleWildcard { literal, .. } => glob::prefix_plausible(literal, prefix),
            Matcher::PathfulWildcard { components, .. } => {
                PartialMatch::of(components, prefix).matched > 0
            }
            Matcher::PathPrefix { relative, .. } => relative.starts_with(prefix),
            Matcher::PlainPath { prefix: own, .. } => own.starts_with(prefix),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Pattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Pattern {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl Matcher {
    fn compile(kind: PatternKind, text: &str) -> Self {
        match kind {
            PatternKind::NoOp => Self::NoOp,
            PatternKind::SimpleExtension => Self::SimpleExtension {
                ext: clean::extension(text).to_owned(),
            },
            PatternKind::DoubleWildcard => Self::DoubleWildcard {
                glob: ExactGlob::new(text),
                wildcard: compile_wildcard(kind, text),
                literal: glob::literal_prefix(text).to_owned(),
            },
            PatternKind::PathlessWildcard => Self::PathlessWildcard {
                glob: ExactGlob::new(text),
                wildcard: compile_wildcard(kind, text),
            },
            PatternKind::PathfulWildcard => {
                // A leading separator anchors at the root, which pathful
                // patterns already are; it contributes no component.
                let anchored = text.strip_prefix(SEPARATOR).unwrap_or(text);
                Self::PathfulWildcard {
                    glob: ExactGlob::new(text),
                    components: anchored.split(SEPARATOR).map(SegmentGlob::new).collect(),
                }
            }
            PatternKind::PathPrefix => {
                let rooted = text.strip_prefix(SEPARATOR).unwrap_or(text);
                let relative = rooted.strip_suffix(SEPARATOR).unwrap_or(rooted).to_owned();
                let prefix = format!("{relative}{SEPARATOR}");
                Self::PathPrefix {
                    glob: ExactGlob::new(text),
                    relative,
                    prefix,
                }
            }
            PatternKind::PlainPath => Self::PlainPath {
                glob: ExactGlob::new(text),
                prefix: format!("{text}{SEPARATOR}"),
                suffix: format!("{SEPARATOR}{text}"),
                inner: format!("{SEPARATOR}{text}{SEPARATOR}"),
            },
        }
    }
}

/// Selects the matcher variant for an already cleaned pattern.
fn classify(text: &str) -> PatternKind {
    if LOCAL_DIR_PATTERNS.contains(&text) {
        return PatternKind::NoOp;
    }

    let has_separator = text.contains(SEPARATOR);
    if !has_separator && text.len() > 1 && text.strip_prefix('*') == Some(clean::extension(text)) {
        return PatternKind::SimpleExtension;
    }
    if has_separator && text.contains("**") {
        return PatternKind::DoubleWildcard;
    }
    if text.contains('*') {
        // A bare `*` never crosses a separator, which is right for gitignore
        // only when the pattern itself names a directory.
        return if has_separator {
            PatternKind::PathfulWildcard
        } else {
            PatternKind::PathlessWildcard
        };
    }
    if text.starts_with(SEPARATOR) {
        return PatternKind::PathPrefix;
    }
    PatternKind::PlainPath
}

const fn uses_glob(kind: PatternKind) -> bool {
    !matches!(kind, PatternKind::NoOp | PatternKind::SimpleExtension)
}

/// Builds the anchored regular expression for the wildcard variants.
///
/// The pattern is escaped first, so only the wildcards rewritten here carry
/// any meaning.
fn wildcard_expression(kind: PatternKind, text: &str) -> Option<String> {
    let expr = match kind {
        PatternKind::DoubleWildcard => double_wildcard_expression(text),
        PatternKind::PathlessWildcard => regex::escape(text).replace(r"\*", ".*"),
        _ => return None,
    };
    Some(format!("^{expr}$"))
}

/// Rewrites the wildcards of a separator-bearing pattern.
///
/// `**` is recursive only as a whole component: followed by a separator it
/// matches zero or more leading directories, and at the end it matches
/// everything below. Anywhere else it is an ordinary `*`, which stays within
/// one component.
fn double_wildcard_expression(text: &str) -> String {
    let sep = regex::escape(SEPARATOR.encode_utf8(&mut [0; 4]));
    let any_directories = format!("(?:.*{sep})?");
    let within_component = format!("[^{sep}]*");

    let mut expr = String::with_capacity(text.len() * 2);
    let mut rest = text;
    let mut component_start = true;

    while let Some(index) = rest.find('*') {
        let literal = &rest[..index];
        expr.push_str(&regex::escape(literal));
        if !literal.is_empty() {
            component_start = literal.ends_with(SEPARATOR);
        }

        let star = &rest[index..];
        match star.strip_prefix("**") {
            Some(tail) if component_start && tail.starts_with(SEPARATOR) => {
                expr.push_str(&any_directories);
                rest = &tail[SEPARATOR.len_utf8()..];
            }
            Some("") if component_start => {
                expr.push_str(".*");
                rest = "";
            }
            Some(tail) => {
                expr.push_str(&within_component);
                rest = tail;
                component_start = false;
            }
            None => {
                expr.push_str(&within_component);
                rest = &star[1..];
                component_start = false;
            }
        }
    }
    expr.push_str(&regex::escape(rest));
    expr
}

fn compile_wildcard(kind: PatternKind, text: &str) -> Option<Regex> {
    let expr = wildcard_expression(kind, text)?;
    match Regex::new(&expr) {
        Ok(regex) => Some(regex),
        Err(error) => {
            trace_pattern_degraded(text, &error.to_string());
            None
        }
    }
}

fn wildcard_matches(wildcard: Option<&Regex>, name: &str) -> bool {
    wildcard.is_some_and(|regex| regex.is_match(name))
}

/// Progress of a pathful pattern over the components of a candidate path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct PartialMatch {
    /// Leading components matched before the first failure.
    matched: usize,
    /// Components in the candidate path.
    total: usize,
}

impl PartialMatch {
    fn of(components: &[SegmentGlob], name: &str) -> Self {
        let matched = name
            .split(SEPARATOR)
            .zip(components)
            .take_while(|(component, segment)| segment.is_match(component))
            .count();
        Self {
            matched,
            total: name.split(SEPARATOR).count(),
        }
    }

    /// The whole candidate was consumed and it is exactly as deep as the
    /// pattern.
    const fn is_complete(self, depth: usize) -> bool {
        self.matched == self.total && self.total == depth
    }
}
