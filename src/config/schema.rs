//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the routing
//! core. All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::guard::policy::Access;

/// Root configuration for the routing core.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Redirect targets and fallback access for unmatched paths.
    pub defaults: DefaultsConfig,

    /// Guard rules, evaluated in declaration order.
    pub routes: Vec<RouteRuleConfig>,

    /// Navigation entries for active-link highlighting.
    pub nav: Vec<NavItemConfig>,

    /// Flat map of feature names to backend endpoint URLs.
    ///
    /// Opaque external contract: the networking layer consumes it, the
    /// routing core only validates and exposes it.
    pub endpoints: BTreeMap<String, String>,
}

/// Defaults applied when a rule names no redirect of its own.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Where unauthenticated sessions are sent from restricted routes.
    pub login_redirect: String,

    /// Where signed-in sessions are sent from guest-only routes.
    pub home_redirect: String,

    /// Access applied to paths matching no rule.
    pub fallback_access: Access,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            login_redirect: "/login".to_string(),
            home_redirect: "/dashboard".to_string(),
            fallback_access: Access::Public,
        }
    }
}

/// One guard rule as written in the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteRuleConfig {
    /// Route pattern (e.g., "/courses/:id/learn").
    pub pattern: String,

    /// Who may see routes matching the pattern.
    pub access: Access,

    /// Rule-specific redirect target (absolute path).
    #[serde(default)]
    pub redirect: Option<String>,
}

/// One navigation entry as written in the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavItemConfig {
    /// Display label.
    pub label: String,

    /// Pattern deciding when the entry is highlighted.
    pub pattern: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::policy::Role;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: RouterConfig = toml::from_str("").unwrap();
        assert_eq!(config.defaults.login_redirect, "/login");
        assert_eq!(config.defaults.home_redirect, "/dashboard");
        assert_eq!(config.defaults.fallback_access, Access::Public);
        assert!(config.routes.is_empty());
        assert!(config.endpoints.is_empty());
    }

    #[test]
    fn test_full_config_round_trip() {
        let toml_src = r#"
            [defaults]
            login_redirect = "/signin"
            home_redirect = "/home"

            [[routes]]
            pattern = "/dashboard"
            access = "require-auth"

            [[routes]]
            pattern = "/admin"
            access = { require-role = "admin" }

            [[nav]]
            label = "Courses"
            pattern = "/courses"

            [endpoints]
            course_catalog = "https://api.example.com/api/v1/courses"
        "#;

        let config: RouterConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.defaults.login_redirect, "/signin");
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[1].access, Access::RequireRole(Role::Admin));
        assert_eq!(config.nav[0].label, "Courses");
        assert_eq!(
            config.endpoints["course_catalog"],
            "https://api.example.com/api/v1/courses"
        );
    }
}
