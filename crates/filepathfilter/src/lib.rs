#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filepathfilter` decides whether a path passes a set of gitignore-flavoured
//! include and exclude patterns, and whether anything below a directory
//! prefix could pass at all. The second question lets a directory walker or
//! file stager prune whole subtrees before descending into them.
//!
//! # Design
//!
//! - [`Pattern`] compiles one raw pattern string. The string is cleaned and
//!   classified once into a [`PatternKind`]: the local directory, an
//!   extension shorthand (`*.txt`), a recursive wildcard (`src/**`), a
//!   wildcard without separators (`test*`), a wildcard with separators
//!   (`sub/*.txt`), a root-anchored path (`/build`) or a plain path
//!   (`build`). Each kind carries its own full-path and prefix algorithms.
//! - [`Filter`] owns the ordered include and exclude lists and implements
//!   [`Filter::allows_pattern`] and [`Filter::has_prefix`].
//! - [`PathFilter`] abstracts over a present or absent filter; `None` allows
//!   everything.
//! - [`FilterConfig`] is the plain configuration form of a filter, with
//!   `serde` support behind the `serde` feature.
//!
//! # Invariants
//!
//! - Every string compiles. Glob or wildcard expressions that cannot be built
//!   are disabled and never match; [`Pattern::validate`] reports them.
//! - When include patterns exist a path must match one of them, and excludes
//!   are only consulted for paths that did. The first matching exclude
//!   rejects the path.
//! - Patterns are cleaned at construction and queried paths at query time,
//!   both using the host separator.
//! - Compiled state is never mutated, so filters can be shared freely across
//!   threads.
//!
//! # Examples
//!
//! ```
//! use filepathfilter::Filter;
//!
//! let filter = Filter::new(["src/**", "*.md"], ["**/generated"]);
//!
//! assert!(filter.allows("src/app/main.rs"));
//! assert!(filter.allows("docs/guide.md"));
//! assert!(!filter.allows("src/app/generated"));
//! assert!(filter.has_prefix("src"));
//! ```
//!
//! # See also
//!
//! - [`debug_filter`] for the `tracing` events emitted when the `tracing`
//!   feature is enabled.
//! - [`globset`] for the conventional glob matching used as a fallback by
//!   most pattern kinds.

mod clean;
mod config;
pub mod debug_filter;
mod error;
mod filter;
mod glob;
mod kind;
mod pattern;

pub use clean::{SEPARATOR, clean};
pub use config::FilterConfig;
pub use error::PatternError;
pub use filter::{Filter, PathFilter};
pub use kind::PatternKind;
pub use pattern::Pattern;
