//! Client-side routing core for an e-learning web frontend.

pub mod config;
pub mod guard;
pub mod nav;
pub mod routing;

pub use config::schema::RouterConfig;
pub use guard::evaluator::{GuardDecision, RouteGuard};
pub use guard::policy::{Access, Role, Session};
pub use guard::shared::SharedGuard;
pub use routing::matcher::matches;
pub use routing::pattern::PathPattern;
