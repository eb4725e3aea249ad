//! Navigation highlighting.
//!
//! # Responsibilities
//! - Hold declared navigation entries with their route patterns
//! - Pick the entry to highlight for the current path
//!
//! # Design Decisions
//! - Same matcher semantics as guards (literal entries highlight on
//!   nested sub-paths)
//! - First matching entry wins, so order entries most-specific first

use crate::routing::pattern::PathPattern;

/// One navigation entry.
#[derive(Debug, Clone)]
pub struct NavItem {
    pub label: String,
    pub pattern: PathPattern,
}

impl NavItem {
    pub fn new(label: impl Into<String>, pattern: &str) -> Self {
        Self {
            label: label.into(),
            pattern: PathPattern::parse(pattern),
        }
    }

    /// True if this entry should be highlighted for `path`.
    pub fn is_active(&self, path: &str) -> bool {
        self.pattern.matches(path)
    }
}

/// Index of the first entry matching `current_path`, if any.
pub fn active_index(items: &[NavItem], current_path: &str) -> Option<usize> {
    items.iter().position(|item| item.is_active(current_path))
}
