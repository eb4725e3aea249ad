//! Atomically swappable guard table for hot reload.
//!
//! The UI evaluates guards on every render while a config reload may land at
//! any time; `arc-swap` gives lock-free reads with atomic replacement.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::guard::evaluator::{GuardDecision, RouteGuard};
use crate::guard::policy::Session;

/// Shared handle over a compiled [`RouteGuard`].
///
/// Cloning the handle is cheap; all clones observe the same table.
#[derive(Debug, Clone)]
pub struct SharedGuard {
    inner: Arc<ArcSwap<RouteGuard>>,
}

impl SharedGuard {
    pub fn new(guard: RouteGuard) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(guard)),
        }
    }

    /// Snapshot of the current table.
    pub fn current(&self) -> Arc<RouteGuard> {
        self.inner.load_full()
    }

    /// Evaluate against the current table.
    pub fn evaluate(&self, path: &str, session: &Session) -> GuardDecision {
        self.inner.load().evaluate(path, session)
    }

    /// Replace the table. In-flight evaluations keep the snapshot they
    /// loaded; new evaluations see the replacement.
    pub fn replace(&self, guard: RouteGuard) {
        self.inner.store(Arc::new(guard));
        tracing::info!("Guard table replaced");
    }
}
