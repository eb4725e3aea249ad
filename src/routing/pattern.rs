//! Path pattern compilation.
//!
//! # Responsibilities
//! - Parse a declared route pattern into tagged segments
//! - Classify patterns as literal or parameterized
//! - Never fail: malformed input degrades instead of erroring
//!
//! # Design Decisions
//! - A segment starting with `:` is a parameter; a `:` elsewhere is literal text
//! - Parameter names are informational, never captured at match time
//! - Compiled once, matched many times

use std::fmt;

/// One `/`-delimited token of a declared route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Exact string segment, matched byte-for-byte.
    Literal(String),
    /// Placeholder segment such as `:id`. A bare `:` (empty name) is
    /// malformed input and degrades to a wildcard that also matches
    /// empty content.
    Param(String),
}

/// A compiled route pattern.
///
/// Compilation cannot fail; any string produces a usable pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
    parameterized: bool,
}

impl PathPattern {
    /// Compile a raw pattern string.
    pub fn parse(pattern: &str) -> Self {
        let segments: Vec<Segment> = pattern
            .split('/')
            .map(|token| match token.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(token.to_string()),
            })
            .collect();
        let parameterized = segments.iter().any(|s| matches!(s, Segment::Param(_)));

        Self {
            raw: pattern.to_string(),
            segments,
            parameterized,
        }
    }

    /// The pattern as originally written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True if the pattern contains at least one parameter segment.
    ///
    /// Parameterized patterns match exact-anchored; literal patterns also
    /// match nested sub-paths at a segment boundary.
    pub fn is_parameterized(&self) -> bool {
        self.parameterized
    }

    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Parameter names in declaration order. Documentation only.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for PathPattern {
    fn from(pattern: &str) -> Self {
        Self::parse(pattern)
    }
}
