//! Route guard subsystem.
//!
//! # Data Flow
//! ```text
//! Observed path + session state
//!     → evaluator.rs (scan rules, first matching pattern wins)
//!     → policy.rs (access check against the session)
//!     → Return: Render | Redirect | Deny
//!
//! Guard Compilation (at config load):
//!     RouteRuleConfig[]
//!     → Compile patterns
//!     → Freeze as immutable RouteGuard
//!     → Optionally publish via SharedGuard for hot reload
//! ```
//!
//! # Design Decisions
//! - Rules evaluated in declaration order, first match wins
//! - Guard table immutable after construction (re-evaluated on every render)
//! - Unmatched paths fall back to a configured default access
//! - Deterministic: same path and session always yield the same decision

pub mod evaluator;
pub mod policy;
pub mod shared;
