//! Integration tests for unusual patterns and paths.
//!
//! Every string compiles to some pattern, and no query panics, no matter how
//! odd the input.

#![cfg(unix)]

use filepathfilter::{Filter, Pattern, PatternError, PatternKind, clean};

// ============================================================================
// Degenerate Patterns
// ============================================================================

/// Verifies the empty pattern is the local directory.
#[test]
fn empty_pattern_is_local_directory() {
    let pattern = Pattern::new("");

    assert_eq!(pattern.kind(), PatternKind::NoOp);
    assert_eq!(pattern.as_str(), ".");
    assert!(pattern.matches("anything"));
}

/// Verifies a bare root pattern compiles and stays anchored.
#[test]
fn root_pattern_compiles() {
    let pattern = Pattern::new("/");

    assert_eq!(pattern.kind(), PatternKind::PathPrefix);
    assert_eq!(pattern.as_str(), "/");
    assert!(pattern.has_prefix(""));
}

/// Verifies separators and dots collapse before classification.
#[test]
fn redundant_separators_collapse() {
    let pattern = Pattern::new("a///b/./c/");

    assert_eq!(pattern.as_str(), "a/b/c");
    assert_eq!(pattern.kind(), PatternKind::PlainPath);
}

/// Verifies `..` that escapes the relative root is preserved.
#[test]
fn parent_segments_are_preserved_when_relative() {
    assert_eq!(Pattern::new("../shared").as_str(), "../shared");
    assert_eq!(Pattern::new("/../shared").as_str(), "/shared");
}

// ============================================================================
// Malformed Syntax
// ============================================================================

/// Verifies an unterminated character class compiles and matches literally.
#[test]
fn unterminated_class_does_not_panic() {
    let filter = Filter::new(Vec::<&str>::new(), ["cache["]);

    assert!(!filter.allows("cache["));
    assert!(filter.allows("cache"));
}

/// Verifies strict validation surfaces the malformed glob.
#[test]
fn validate_reports_unterminated_class() {
    let error = Pattern::validate("a/b[").unwrap_err();

    assert!(matches!(error, PatternError::InvalidGlob { .. }));
    assert_eq!(error.pattern(), "a/b[");
    assert!(error.to_string().contains("a/b["));
}

/// Verifies regular expression metacharacters carry no special meaning.
#[test]
fn regex_metacharacters_are_literal() {
    let pattern = Pattern::new("dir/**/file.(1|2)");

    assert!(pattern.matches("dir/x/file.(1|2)"));
    assert!(!pattern.matches("dir/x/file.1"));

    let pattern = Pattern::new("^$*");
    assert!(pattern.matches("^$"));
    assert!(pattern.matches("deep/^$tail"));
    assert!(!pattern.matches("x"));
}

/// Verifies a character class works through the glob fallback.
#[test]
fn character_class_through_fallback() {
    let pattern = Pattern::new("data[0-9].csv");

    assert_eq!(pattern.kind(), PatternKind::PlainPath);
    assert!(pattern.matches("data7.csv"));
    assert!(!pattern.matches("dataX.csv"));
}

// ============================================================================
// Unusual Paths
// ============================================================================

/// Verifies unicode paths and patterns.
#[test]
fn unicode_components() {
    let filter = Filter::new(["*.md"], ["entwürfe"]);

    assert!(filter.allows("docs/größe.md"));
    assert!(!filter.allows("docs/entwürfe/plan.md"));
}

/// Verifies queried paths are cleaned before matching.
#[test]
fn queried_paths_are_cleaned() {
    let filter = Filter::new(["/src"], Vec::<&str>::new());

    assert!(filter.allows("./src/lib.rs"));
    assert!(filter.allows("src//lib.rs"));
    assert!(filter.allows("docs/../src/lib.rs"));
    assert!(!filter.allows("docs/src/lib.rs"));
}

/// Verifies the empty path cleans to the local directory.
#[test]
fn empty_path_is_local_directory() {
    assert_eq!(clean(""), ".");

    let filter = Filter::new(["*.rs"], Vec::<&str>::new());
    assert!(!filter.allows(""));
}
