use anyhow::{Context, Result};
use std::env;

/// Environment variable holding the Telegram bot token.
pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";
/// Environment variable holding the OpenWeather API key.
pub const WEATHER_TOKEN_VAR: &str = "WEATHER_TOKEN";

/// Process configuration: the two secrets the bot needs.
///
/// Constructed once at startup and passed into the pipeline explicitly, so
/// core logic never reads the ambient environment and tests can build a
/// `Config` directly.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub weather_api_key: String,
}

impl Config {
    pub fn new(bot_token: impl Into<String>, weather_api_key: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            weather_api_key: weather_api_key.into(),
        }
    }

    /// Load configuration from the environment. Missing variables are a
    /// fatal startup error; the process must not start without both secrets.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bot_token: require_var(BOT_TOKEN_VAR)?,
            weather_api_key: require_var(WEATHER_TOKEN_VAR)?,
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    let value = env::var(name).with_context(|| {
        format!("{name} is not set.\nHint: export it or add it to a .env file.")
    })?;

    if value.trim().is_empty() {
        anyhow::bail!("{name} is set but empty");
    }

    Ok(value)
}
