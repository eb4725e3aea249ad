//! Guard evaluation.
//!
//! # Responsibilities
//! - Store compiled guard rules
//! - Look up the rule matching an observed path
//! - Turn rule access plus session state into a render decision
//!
//! # Design Decisions
//! - Immutable after construction (safe to share without locks)
//! - O(n) rule scan in declaration order, first match wins
//! - Explicit fallback access rather than silent default
//! - Pure: no clock, no I/O, no shared mutable state

use serde::Serialize;

use crate::config::schema::RouterConfig;
use crate::guard::policy::{Access, Session};
use crate::routing::pattern::PathPattern;

/// One compiled guard rule.
#[derive(Debug, Clone)]
pub struct GuardRule {
    pub pattern: PathPattern,
    pub access: Access,
    /// Rule-specific redirect target, overriding the configured defaults.
    pub redirect: Option<String>,
}

/// Ternary render decision for a guarded route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    /// Render the route content.
    Render,
    /// Render nothing while the client navigates to `to`.
    Redirect { to: String },
    /// Render nothing, permanently.
    Deny,
}

/// Compiled guard table for the whole route surface.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    rules: Vec<GuardRule>,
    fallback_access: Access,
    login_redirect: String,
    home_redirect: String,
}

impl RouteGuard {
    /// Compile a guard table from a validated configuration.
    pub fn from_config(config: &RouterConfig) -> Self {
        let rules = config
            .routes
            .iter()
            .map(|r| GuardRule {
                pattern: PathPattern::parse(&r.pattern),
                access: r.access,
                redirect: r.redirect.clone(),
            })
            .collect();

        Self {
            rules,
            fallback_access: config.defaults.fallback_access,
            login_redirect: config.defaults.login_redirect.clone(),
            home_redirect: config.defaults.home_redirect.clone(),
        }
    }

    /// The compiled rules, in evaluation order.
    pub fn rules(&self) -> &[GuardRule] {
        &self.rules
    }

    /// Decide what to render for `path` under `session`.
    ///
    /// Never fails: unmatched paths use the fallback access, malformed
    /// patterns were already degraded at compile time.
    pub fn evaluate(&self, path: &str, session: &Session) -> GuardDecision {
        let (access, redirect) = self
            .rules
            .iter()
            .find(|rule| rule.pattern.matches(path))
            .map(|rule| (rule.access, rule.redirect.as_deref()))
            .unwrap_or((self.fallback_access, None));

        self.decide(access, redirect, session)
    }

    fn decide(&self, access: Access, redirect: Option<&str>, session: &Session) -> GuardDecision {
        match access {
            Access::Public => GuardDecision::Render,
            Access::GuestOnly => {
                if session.is_authenticated() {
                    GuardDecision::Redirect {
                        to: redirect.unwrap_or(&self.home_redirect).to_string(),
                    }
                } else {
                    GuardDecision::Render
                }
            }
            Access::RequireAuth => {
                if session.is_authenticated() {
                    GuardDecision::Render
                } else {
                    GuardDecision::Redirect {
                        to: redirect.unwrap_or(&self.login_redirect).to_string(),
                    }
                }
            }
            Access::RequireRole(role) => {
                if !session.is_authenticated() {
                    GuardDecision::Redirect {
                        to: redirect.unwrap_or(&self.login_redirect).to_string(),
                    }
                } else if session.has_role(role) {
                    GuardDecision::Render
                } else {
                    // Signed in with the wrong role: bounce if the rule names
                    // a target, otherwise render nothing permanently.
                    match redirect {
                        Some(to) => GuardDecision::Redirect { to: to.to_string() },
                        None => GuardDecision::Deny,
                    }
                }
            }
        }
    }
}
