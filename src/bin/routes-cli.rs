//! Management CLI for the LMS routing core.
//!
//! Loads a route configuration and answers the questions a frontend
//! developer asks of it: does this path render for this session, which
//! rules are compiled, is the config valid, and does it stay valid as it
//! is edited.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lms_router::config::loader::{load_config, ConfigError};
use lms_router::config::watcher::ConfigWatcher;
use lms_router::{Role, RouteGuard, Session};

#[derive(Parser)]
#[command(name = "routes-cli")]
#[command(about = "Route table and guard inspection for the LMS frontend", long_about = None)]
struct Cli {
    /// Path to the route configuration file.
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a path against the guard table
    Check {
        /// Candidate path, e.g. "/courses/101/learn"
        path: String,

        /// Roles carried by the signed-in session (repeatable)
        #[arg(long)]
        role: Vec<Role>,

        /// Evaluate as a signed-in session even with no roles
        #[arg(long)]
        signed_in: bool,
    },
    /// List compiled route rules in evaluation order
    Routes,
    /// Validate the configuration and report all errors
    Validate,
    /// Watch the configuration file and revalidate on change
    Watch,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lms_router=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            path,
            role,
            signed_in,
        } => {
            let config = load_config(&cli.config)?;
            let guard = RouteGuard::from_config(&config);

            let session = if signed_in || !role.is_empty() {
                Session::SignedIn { roles: role }
            } else {
                Session::Anonymous
            };

            let decision = guard.evaluate(&path, &session);
            let output = serde_json::json!({
                "path": path,
                "result": decision,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Routes => {
            let config = load_config(&cli.config)?;
            let guard = RouteGuard::from_config(&config);

            for rule in guard.rules() {
                let redirect = rule.redirect.as_deref().unwrap_or("-");
                println!(
                    "{:<40} {:<30} {}",
                    rule.pattern.as_str(),
                    format!("{:?}", rule.access),
                    redirect
                );
            }
        }
        Commands::Validate => match load_config(&cli.config) {
            Ok(config) => {
                println!(
                    "Configuration OK: {} routes, {} nav entries, {} endpoints",
                    config.routes.len(),
                    config.nav.len(),
                    config.endpoints.len()
                );
            }
            Err(ConfigError::Validation(errors)) => {
                eprintln!("Configuration invalid ({} errors):", errors.len());
                for error in errors {
                    eprintln!("  - {error}");
                }
                std::process::exit(1);
            }
            Err(e) => return Err(e.into()),
        },
        Commands::Watch => {
            let (watcher, updates) = ConfigWatcher::new(&cli.config);
            // Kept alive for the lifetime of the loop; dropping it stops
            // the notify backend.
            let _handle = watcher.run()?;

            tracing::info!(config = ?cli.config, "Watching for configuration changes");
            for config in updates {
                tracing::info!(
                    routes = config.routes.len(),
                    endpoints = config.endpoints.len(),
                    "Configuration reloaded"
                );
            }
        }
    }

    Ok(())
}
