//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → compiled into RouteGuard / NavItem tables
//!
//! On reload signal:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → new guard table swapped in via SharedGuard
//!     → renders observe the new table
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - A failed reload keeps the previous configuration

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use schema::DefaultsConfig;
pub use schema::NavItemConfig;
pub use schema::RouteRuleConfig;
pub use schema::RouterConfig;
