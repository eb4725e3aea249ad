//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check patterns and redirect targets are absolute paths
//! - Detect duplicate patterns
//! - Check endpoint values parse as URLs
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted into the system
//! - Matching itself stays lenient; strictness lives here, at config intake

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::config::schema::RouterConfig;
use crate::guard::policy::{Access, Role};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route pattern {0:?} must start with '/'")]
    PatternNotAbsolute(String),

    #[error("duplicate route pattern {0:?}")]
    DuplicatePattern(String),

    #[error("redirect {target:?} for pattern {pattern:?} must be an absolute path")]
    RedirectNotAbsolute { pattern: String, target: String },

    #[error("nav pattern {0:?} must start with '/'")]
    NavPatternNotAbsolute(String),

    #[error("default redirect {0:?} must be an absolute path")]
    DefaultRedirectNotAbsolute(String),

    #[error("endpoint {name:?} is not a valid URL: {reason}")]
    InvalidEndpointUrl { name: String, reason: String },

    #[error("fallback access must not require role {0:?}: no redirect target applies to unmatched paths")]
    RoleGatedFallback(Role),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for target in [
        &config.defaults.login_redirect,
        &config.defaults.home_redirect,
    ] {
        if !target.starts_with('/') {
            errors.push(ValidationError::DefaultRedirectNotAbsolute(target.clone()));
        }
    }

    // A role-gated fallback can only ever hard-deny: unmatched paths carry
    // no rule, so no redirect target exists for the wrong-role case.
    if let Access::RequireRole(role) = config.defaults.fallback_access {
        errors.push(ValidationError::RoleGatedFallback(role));
    }

    let mut seen = HashSet::new();
    for route in &config.routes {
        if !route.pattern.starts_with('/') {
            errors.push(ValidationError::PatternNotAbsolute(route.pattern.clone()));
        }
        if !seen.insert(route.pattern.as_str()) {
            errors.push(ValidationError::DuplicatePattern(route.pattern.clone()));
        }
        if let Some(target) = &route.redirect {
            if !target.starts_with('/') {
                errors.push(ValidationError::RedirectNotAbsolute {
                    pattern: route.pattern.clone(),
                    target: target.clone(),
                });
            }
        }
    }

    for item in &config.nav {
        if !item.pattern.starts_with('/') {
            errors.push(ValidationError::NavPatternNotAbsolute(item.pattern.clone()));
        }
    }

    for (name, value) in &config.endpoints {
        if let Err(e) = Url::parse(value) {
            errors.push(ValidationError::InvalidEndpointUrl {
                name: name.clone(),
                reason: e.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
