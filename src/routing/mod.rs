//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Declared route pattern ("/courses/:id/learn")
//!     → pattern.rs (compile into tagged segments, once)
//!     → matcher.rs (evaluate candidate paths, per render)
//!     → Return: bool match/no-match
//! ```
//!
//! # Design Decisions
//! - Patterns compiled at construction, immutable afterwards
//! - No regex in the match path (segment comparison only)
//! - Matching is pure and synchronous, cheap enough to run on every render
//! - Parameters are placeholders only, never captured

pub mod matcher;
pub mod pattern;
