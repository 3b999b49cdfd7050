pub mod backend;
pub mod clients;
pub mod config;
pub mod error;
pub mod parsing;
pub mod prompts;
pub mod services;
pub mod smoke;

pub use error::{CareerError, Result};
pub use services::{AiServices, CareerInsights, Insight};
pub use smoke::{SmokeParams, run_smoke_test};

// Load env once per process from a standardized location:
// CAREER_ENV_FILE if set, else ./.env, else ../.env when no core var is present yet.
// Missing files are silently ignored.
pub fn load_env() {
    if let Ok(env_path) = std::env::var("CAREER_ENV_FILE") {
        let _ = dotenvy::from_path(env_path);
        return;
    }
    let _ = dotenvy::from_path(".env");
    let core_present =
        std::env::var("OPENAI_API_KEY").is_ok() || std::env::var("CAREER_API_BASE_URL").is_ok();
    if !core_present {
        let _ = dotenvy::from_path("../.env");
    }
}

/// Install the stderr fmt subscriber; CAREER_LOG overrides `default_filter`.
/// Safe to call more than once.
pub fn init_tracing(default_filter: &str) {
    use std::io::IsTerminal;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("CAREER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
