//! Route matching logic.
//!
//! # Responsibilities
//! - Match literal patterns exactly or as a prefix at a segment boundary
//! - Match parameterized patterns segment-by-segment, anchored at both ends
//! - Produce a boolean for every input, malformed or not
//!
//! # Design Decisions
//! - Path matching is case-sensitive (no normalization)
//! - Literal patterns also match nested sub-paths ("/courses" matches
//!   "/courses/101"); parameterized patterns never do
//! - A named parameter matches exactly one segment of at least one character
//! - Candidates are assumed pre-stripped of query and fragment by the caller

use crate::routing::pattern::{PathPattern, Segment};

impl PathPattern {
    /// Returns true if the candidate path matches this pattern.
    ///
    /// Pure and non-panicking; callers may invoke it on every render.
    pub fn matches(&self, candidate: &str) -> bool {
        let raw = self.as_str();

        // An empty pattern is a terminal match on the root path only.
        if raw.is_empty() {
            return candidate == "/";
        }

        if !self.is_parameterized() {
            return candidate == raw
                || (candidate.len() > raw.len()
                    && candidate.starts_with(raw)
                    && candidate.as_bytes()[raw.len()] == b'/');
        }

        let mut parts = candidate.split('/');
        for segment in self.segments() {
            let Some(part) = parts.next() else {
                return false;
            };
            match segment {
                Segment::Literal(lit) => {
                    if part != lit {
                        return false;
                    }
                }
                Segment::Param(name) => {
                    // A named parameter requires content; a bare `:` degrades
                    // to a wildcard that also accepts an empty segment.
                    if part.is_empty() && !name.is_empty() {
                        return false;
                    }
                }
            }
        }
        parts.next().is_none()
    }
}

/// Match a raw pattern string against a candidate path.
///
/// Compiles the pattern each call; callers testing the same pattern
/// repeatedly should hold a [`PathPattern`] instead.
pub fn matches(pattern: &str, candidate: &str) -> bool {
    PathPattern::parse(pattern).matches(candidate)
}
