//! api_smoke - manual smoke test for the AI services client
//!
//! Calls the five career insight capabilities in order with fixed inputs and
//! prints whether each returned a result. Takes no arguments.
//!
//! Usage:
//!   cargo run --bin api_smoke

use anyhow::{Context, Result};
use career_roadmap::config::{Config, DEFAULT_LOG_FILTER};
use career_roadmap::{AiServices, SmokeParams, run_smoke_test};

#[tokio::main]
async fn main() -> Result<()> {
    career_roadmap::load_env();
    career_roadmap::init_tracing(DEFAULT_LOG_FILTER);

    let config = Config::load().context("Failed to load configuration")?;

    let ai_service =
        AiServices::new(&config.ai).context("Failed to initialize AI services client")?;

    let mut stdout = std::io::stdout().lock();
    run_smoke_test(&ai_service, &SmokeParams::default(), &mut stdout).await?;

    Ok(())
}
