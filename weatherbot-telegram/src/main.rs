//! Binary crate for the Telegram weather bot.
//!
//! This crate focuses on:
//! - Loading configuration from the environment (fails fast when a secret
//!   is missing)
//! - Initializing tracing
//! - Running the long-polling loop and routing messages

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use weatherbot_core::{Config, LookupPipeline};

mod bot;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let pipeline = LookupPipeline::from_config(&config)?;

    bot::run(&config, pipeline).await
}
