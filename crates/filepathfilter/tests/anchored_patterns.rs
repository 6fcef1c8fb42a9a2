//! Tests for anchored vs unanchored literal patterns.
//!
//! - A leading separator anchors a pattern to the root of the tree.
//! - A pattern without wildcards or a leading separator matches as a path
//!   component (or sub-path) anywhere in the tree.

#![cfg(unix)]

use filepathfilter::{Filter, Pattern, PatternKind};

// =============================================================================
// Root-Anchored Patterns
// =============================================================================

#[test]
fn anchored_pattern_matches_only_at_root() {
    let pattern = Pattern::new("/root");

    assert_eq!(pattern.kind(), PatternKind::PathPrefix);
    assert!(pattern.matches("root"));
    assert!(pattern.matches("root/child"));
    assert!(!pattern.matches("other/root"));
}

#[test]
fn anchored_pattern_respects_component_boundary() {
    let pattern = Pattern::new("/lib");

    assert!(!pattern.matches("library"));
    assert!(!pattern.matches("lib.rs"));
    assert!(pattern.matches("lib/mod.rs"));
}

#[test]
fn anchored_nested_path() {
    let set = Filter::new(Vec::<&str>::new(), ["/src/generated"]);

    assert!(!set.allows("src/generated"));
    assert!(!set.allows("src/generated/api.rs"));
    assert!(set.allows("src/generated_api.rs"));
    assert!(set.allows("crates/x/src/generated"));
}

#[test]
fn anchored_trailing_separator_is_cleaned() {
    let pattern = Pattern::new("/build/");

    assert_eq!(pattern.as_str(), "/build");
    assert!(pattern.matches("build"));
    assert!(pattern.matches("build/out.o"));
}

#[test]
fn anchored_prefix_accepts_ancestors_of_target() {
    let pattern = Pattern::new("/a/b/c");

    assert!(pattern.has_prefix("a"));
    assert!(pattern.has_prefix("a/b"));
    assert!(pattern.has_prefix("a/b/c"));
    assert!(!pattern.has_prefix("b"));
    assert!(!pattern.has_prefix("a/x"));
}

// =============================================================================
// Unanchored Plain Paths
// =============================================================================

#[test]
fn plain_component_matches_anywhere() {
    let pattern = Pattern::new("build");

    assert_eq!(pattern.kind(), PatternKind::PlainPath);
    assert!(pattern.matches("build"));
    assert!(pattern.matches("build/output"));
    assert!(pattern.matches("src/build"));
    assert!(pattern.matches("src/build/output"));
    assert!(!pattern.matches("buildx"));
    assert!(!pattern.matches("rebuild"));
}

#[test]
fn plain_subpath_matches_anywhere() {
    let set = Filter::new(Vec::<&str>::new(), ["node_modules/.cache"]);

    assert!(!set.allows("node_modules/.cache"));
    assert!(!set.allows("web/node_modules/.cache/babel/x.json"));
    assert!(set.allows("web/node_modules/react/index.js"));
}

#[test]
fn plain_path_prefix_is_root_relative() {
    let pattern = Pattern::new("docs");

    assert!(pattern.has_prefix("docs"));
    assert!(pattern.has_prefix("do"));
    assert!(!pattern.has_prefix("src"));
}

#[test]
fn literal_pattern_matches_itself() {
    for raw in ["README.md", "a/b/c", "with space", "v1.2.3", "x+y(z)"] {
        assert!(Pattern::new(raw).matches(raw), "{raw} should match itself");
    }
}

#[test]
fn dot_segments_in_pattern_are_collapsed() {
    let pattern = Pattern::new("./src/../docs/./api");

    assert_eq!(pattern.as_str(), "docs/api");
    assert!(pattern.matches("docs/api/index.html"));
}
