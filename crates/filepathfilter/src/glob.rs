//! Glob primitives shared by the pattern variants.

use std::borrow::Cow;
use std::path::is_separator;

use globset::{GlobBuilder, GlobMatcher};

use crate::clean::SEPARATOR;
use crate::debug_filter::trace_pattern_degraded;

/// Characters that end the literal portion of a glob expression.
const GLOB_META: [char; 3] = ['*', '?', '['];

/// Conventional glob test in which `*` and `?` never cross a separator.
///
/// Expressions that globset rejects produce a matcher that never matches,
/// keeping pattern compilation total.
#[derive(Clone, Debug)]
pub(crate) struct ExactGlob {
    matcher: Option<GlobMatcher>,
}

impl ExactGlob {
    pub(crate) fn new(pattern: &str) -> Self {
        let matcher = match build(pattern) {
            Ok(matcher) => Some(matcher),
            Err(error) => {
                trace_pattern_degraded(pattern, &error.to_string());
                None
            }
        };
        Self { matcher }
    }

    pub(crate) fn is_match(&self, name: &str) -> bool {
        self.matcher
            .as_ref()
            .is_some_and(|matcher| matcher.is_match(name))
    }
}

/// One component of a pathful pattern.
///
/// Matched with the same conventional glob rules as [`ExactGlob`]. A
/// component globset rejects falls back to `*`-only matching so partial
/// matches stay available.
#[derive(Clone, Debug)]
pub(crate) struct SegmentGlob {
    text: String,
    matcher: Option<GlobMatcher>,
}

impl SegmentGlob {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            matcher: build(text).ok(),
        }
    }

    pub(crate) fn is_match(&self, component: &str) -> bool {
        match &self.matcher {
            Some(matcher) => matcher.is_match(component),
            None => segment_matches(&self.text, component),
        }
    }
}

/// Compiles `pattern` with separator-respecting wildcards.
///
/// Braces are literal, so `{a,b}` names exactly that file and never expands
/// into alternatives.
pub(crate) fn build(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    GlobBuilder::new(&literal_braces(pattern))
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
}

/// Wraps every `{` and `}` outside a character class in its own class.
fn literal_braces(pattern: &str) -> Cow<'_, str> {
    if !pattern.contains(['{', '}']) {
        return Cow::Borrowed(pattern);
    }

    let backslash_escapes = !is_separator('\\');
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut in_class = false;
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if backslash_escapes => {
                out.push(c);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push(c);
                if let Some(&negate @ ('!' | '^')) = chars.peek() {
                    out.push(negate);
                    chars.next();
                }
                // A `]` right after the opening bracket is a class member.
                if chars.next_if_eq(&']').is_some() {
                    out.push(']');
                }
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            '{' | '}' if !in_class => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Returns the text of `pattern` preceding its first glob metacharacter.
pub(crate) fn literal_prefix(pattern: &str) -> &str {
    pattern
        .find(GLOB_META)
        .map_or(pattern, |index| &pattern[..index])
}

/// Tests one path component against a component pattern in which `*` is the
/// only wildcard.
///
/// The text before the first `*` must prefix the component, the text after
/// the last `*` must suffix what remains, and every piece in between must
/// appear in order. Pieces never overlap, so `a*a` does not match `a`.
fn segment_matches(pattern: &str, component: &str) -> bool {
    let mut pieces = pattern.split('*');
    let Some(head) = pieces.next() else {
        return component.is_empty();
    };
    let Some(mut rest) = component.strip_prefix(head) else {
        return false;
    };

    let tail: Vec<&str> = pieces.collect();
    let Some((last, middle)) = tail.split_last() else {
        // No `*` at all: the component must be exactly the literal.
        return rest.is_empty();
    };

    for piece in middle {
        match rest.find(piece) {
            Some(index) => rest = &rest[index + piece.len()..],
            None => return false,
        }
    }
    rest.ends_with(last)
}

/// Returns `true` when `literal` extends `name` up to a component boundary,
/// or when `name` already starts with `literal`.
pub(crate) fn prefix_plausible(literal: &str, name: &str) -> bool {
    if literal.is_empty() || name.starts_with(literal) {
        return true;
    }
    match literal.strip_prefix(name) {
        Some(remainder) => name.is_empty() || remainder.starts_with(SEPARATOR),
        None => false,
    }
}
