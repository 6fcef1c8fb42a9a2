//! Structured tracing for pattern compilation and filter decisions.
//!
//! Every function here emits a `tracing` event under the
//! `filepathfilter::filter` target when the `tracing` feature is enabled and
//! compiles to an empty inline function otherwise, so call sites never need
//! their own `cfg` guards.
//!
//! # Examples
//!
//! ```rust,ignore
//! use filepathfilter::debug_filter::{trace_filter_decision, trace_pattern_compiled};
//! use filepathfilter::PatternKind;
//!
//! trace_pattern_compiled("*.tmp", PatternKind::SimpleExtension);
//! trace_filter_decision("scratch.tmp", false, "*.tmp");
//! ```

use crate::PatternKind;

/// Target name for tracing events.
#[cfg(feature = "tracing")]
pub const FILTER_TARGET: &str = "filepathfilter::filter";

/// Traces a raw pattern being compiled into a matcher variant.
///
/// # Arguments
///
/// * `pattern` - The cleaned pattern text (e.g., "*.tmp", "/var/log")
/// * `kind` - The variant chosen for it
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_pattern_compiled(pattern: &str, kind: PatternKind) {
    tracing::debug!(
        target: FILTER_TARGET,
        pattern = %pattern,
        kind = %kind,
        "pattern_compiled"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_pattern_compiled(_pattern: &str, _kind: PatternKind) {}

/// Traces a glob or wildcard expression that could not be built.
///
/// The pattern still compiles; the affected matcher simply never matches.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_pattern_degraded(pattern: &str, reason: &str) {
    tracing::warn!(
        target: FILTER_TARGET,
        pattern = %pattern,
        reason = %reason,
        "pattern_degraded"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_pattern_degraded(_pattern: &str, _reason: &str) {}

/// Traces evaluation of a path against a single pattern.
///
/// # Arguments
///
/// * `path` - The cleaned path being evaluated
/// * `pattern` - The pattern being tested against the path
/// * `is_include` - Whether the pattern belongs to the include set
/// * `matched` - Whether the pattern matched the path
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_filter_evaluate(path: &str, pattern: &str, is_include: bool, matched: bool) {
    tracing::trace!(
        target: FILTER_TARGET,
        path = %path,
        pattern = %pattern,
        is_include = is_include,
        matched = matched,
        "filter_evaluate"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_filter_evaluate(_path: &str, _pattern: &str, _is_include: bool, _matched: bool) {}

/// Traces the final allow/deny decision for a path.
///
/// `pattern` is the rule that decided, or empty when no rule was involved.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_filter_decision(path: &str, allowed: bool, pattern: &str) {
    tracing::debug!(
        target: FILTER_TARGET,
        path = %path,
        allowed = allowed,
        pattern = %pattern,
        "filter_decision"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_filter_decision(_path: &str, _allowed: bool, _pattern: &str) {}

/// Traces whether a directory prefix may still contain allowed paths.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_prefix_decision(prefix: &str, plausible: bool) {
    tracing::trace!(
        target: FILTER_TARGET,
        prefix = %prefix,
        plausible = plausible,
        "prefix_decision"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_prefix_decision(_prefix: &str, _plausible: bool) {}
