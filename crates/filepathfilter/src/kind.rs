use std::fmt;

/// Matcher variant selected when a raw pattern is compiled.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PatternKind {
    /// The local directory or a bare wildcard; matches everything.
    NoOp,
    /// `*.ext` without a separator; matches by file extension at any depth.
    SimpleExtension,
    /// Contains a separator and `**`; may span several components.
    DoubleWildcard,
    /// Contains `*` but no separator; matches the final component at any depth.
    PathlessWildcard,
    /// Contains `*` and a separator but no `**`; matched component by component.
    PathfulWildcard,
    /// Starts with a separator; anchored to the root.
    PathPrefix,
    /// A literal component or sub-path matched anywhere in the path.
    PlainPath,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOp => f.write_str("no-op"),
            Self::SimpleExtension => f.write_str("simple-extension"),
            Self::DoubleWildcard => f.write_str("double-wildcard"),
            Self::PathlessWildcard => f.write_str("pathless-wildcard"),
            Self::PathfulWildcard => f.write_str("pathful-wildcard"),
            Self::PathPrefix => f.write_str("path-prefix"),
            Self::PlainPath => f.write_str("plain-path"),
        }
    }
}
