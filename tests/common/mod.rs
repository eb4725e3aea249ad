//! Shared utilities for integration testing.

use std::io::Write;

use lms_router::config::loader::load_config;
use lms_router::RouterConfig;

/// Route table for a small e-learning frontend, in config-file form.
pub const APP_CONFIG: &str = r#"
[defaults]
login_redirect = "/login"
home_redirect = "/dashboard"

[[routes]]
pattern = "/courses/:id/learn"
access = "require-auth"

[[routes]]
pattern = "/courses"
access = "public"

[[routes]]
pattern = "/dashboard"
access = "require-auth"

[[routes]]
pattern = "/instructor"
access = { require-role = "instructor" }
redirect = "/become-instructor"

[[routes]]
pattern = "/admin"
access = { require-role = "admin" }

[[routes]]
pattern = "/login"
access = "guest-only"

[[routes]]
pattern = "/register"
access = "guest-only"

[[nav]]
label = "Home"
pattern = "/"

[[nav]]
label = "Courses"
pattern = "/courses"

[[nav]]
label = "Dashboard"
pattern = "/dashboard"

[endpoints]
course_catalog = "https://api.example.com/api/v1/courses"
contact = "https://api.example.com/api/v1/contact"
progress = "https://api.example.com/api/v1/progress"
"#;

/// Write a config to a temp file and load it through the real loader.
#[allow(dead_code)]
pub fn load_from_str(toml_src: &str) -> Result<RouterConfig, lms_router::config::loader::ConfigError> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{toml_src}").unwrap();
    load_config(file.path())
}

/// Parse and validate the shared app config.
pub fn app_config() -> RouterConfig {
    load_from_str(APP_CONFIG).unwrap()
}
