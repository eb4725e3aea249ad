//! Access policies and session state.
//!
//! # Responsibilities
//! - Model the roles the application grants
//! - Model the authentication state supplied by the surrounding application
//! - Define who may see a route

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Application role carried by a signed-in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Instructor,
    Admin,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "instructor" => Ok(Role::Instructor),
            "admin" => Ok(Role::Admin),
            other => Err(format!(
                "unknown role {other:?} (expected student, instructor or admin)"
            )),
        }
    }
}

/// Authentication state for one guard evaluation.
///
/// Supplied by the surrounding application; this crate never stores or
/// refreshes sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Anonymous,
    SignedIn { roles: Vec<Role> },
}

impl Session {
    /// Convenience constructor for a session with a single role.
    pub fn with_role(role: Role) -> Self {
        Session::SignedIn { roles: vec![role] }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::SignedIn { .. })
    }

    pub fn has_role(&self, role: Role) -> bool {
        match self {
            Session::SignedIn { roles } => roles.contains(&role),
            Session::Anonymous => false,
        }
    }
}

/// Who may see a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Access {
    /// Anyone, signed in or not.
    Public,
    /// Only anonymous visitors (login, register). Signed-in sessions are
    /// bounced to their dashboard.
    GuestOnly,
    /// Any signed-in session.
    RequireAuth,
    /// A signed-in session carrying the given role.
    RequireRole(Role),
}

impl Default for Access {
    fn default() -> Self {
        Access::Public
    }
}
