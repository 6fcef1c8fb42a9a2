//! Lexical path normalization.
//!
//! Patterns are cleaned once when they are compiled and candidate paths are
//! cleaned on every query, so both sides agree on a single spelling of the
//! same location. Cleaning never touches the filesystem.

use std::path::MAIN_SEPARATOR;

/// Host path separator used for all splitting and joining.
pub const SEPARATOR: char = MAIN_SEPARATOR;

/// Returns the shortest path name lexically equivalent to `path`.
///
/// Repeated separators collapse, `.` elements disappear and `..` elements
/// consume the element before them. A `..` that would climb above the root
/// of a rooted path is dropped, while leading `..` elements of a relative
/// path are preserved. The empty string cleans to `.`.
///
/// # Examples
///
/// ```
/// use filepathfilter::clean;
///
/// assert_eq!(clean("a//b/./c/.."), "a/b");
/// assert_eq!(clean("/../x/"), "/x");
/// assert_eq!(clean("../../y"), "../../y");
/// assert_eq!(clean(""), ".");
/// ```
#[must_use]
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_owned();
    }

    let rooted = path.starts_with(SEPARATOR);
    let mut parts: Vec<&str> = Vec::new();

    for part in path.split(SEPARATOR) {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let mut cleaned = String::with_capacity(path.len());
    if rooted {
        cleaned.push(SEPARATOR);
    }
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            cleaned.push(SEPARATOR);
        }
        cleaned.push_str(part);
    }

    if cleaned.is_empty() {
        cleaned.push('.');
    }
    cleaned
}

/// Returns the final element of `path`, ignoring trailing separators.
///
/// An empty path yields `.` and a path made only of separators yields the
/// separator itself.
#[must_use]
pub fn base(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        return &path[..SEPARATOR.len_utf8()];
    }
    match trimmed.rfind(SEPARATOR) {
        Some(index) => &trimmed[index + SEPARATOR.len_utf8()..],
        None => trimmed,
    }
}

/// Returns the extension of the final element of `path`, including the dot.
///
/// Only the text after the last separator is inspected; the result is empty
/// when that element contains no `.`.
#[must_use]
pub fn extension(path: &str) -> &str {
    let start = path.rfind(SEPARATOR).map_or(0, |index| index + SEPARATOR.len_utf8());
    let name = &path[start..];
    name.rfind('.').map_or("", |index| &name[index..])
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn clean_collapses_redundant_elements() {
        let cases = [
            ("", "."),
            (".", "."),
            ("./", "."),
            ("a/", "a"),
            ("a//b", "a/b"),
            ("a/./b", "a/b"),
            ("a/b/..", "a"),
            ("a/b/../..", "."),
            ("a/b/../../..", ".."),
            ("../a", "../a"),
            ("../../a/..", "../.."),
            ("/", "/"),
            ("//", "/"),
            ("/..", "/"),
            ("/../a", "/a"),
            ("/a/b/", "/a/b"),
            ("abc/def/../ghi", "abc/ghi"),
        ];

        for (input, expected) in cases {
            assert_eq!(clean(input), expected, "clean({input:?})");
        }
    }

    #[test]
    fn clean_keeps_backslashes_on_unix() {
        assert_eq!(clean(".\\"), ".\\");
        assert_eq!(clean("a\\b"), "a\\b");
    }

    #[test]
    fn base_returns_last_element() {
        assert_eq!(base("a/b/c.txt"), "c.txt");
        assert_eq!(base("c.txt"), "c.txt");
        assert_eq!(base("a/b/"), "b");
        assert_eq!(base("/"), "/");
        assert_eq!(base(""), ".");
    }

    #[test]
    fn extension_inspects_final_element_only() {
        assert_eq!(extension("*.txt"), ".txt");
        assert_eq!(extension("archive.tar.gz"), ".gz");
        assert_eq!(extension("dir.d/file"), "");
        assert_eq!(extension("noext"), "");
        assert_eq!(extension("*."), ".");
    }
}
