//! Message router: one reply per inbound message.
//!
//! `/start` gets the static welcome; any other text goes through the lookup
//! pipeline. Each message is handled in its own task so a slow provider
//! never blocks the polling loop; the pipeline shares no mutable state
//! between messages.

use anyhow::Result;
use std::sync::Arc;
use teloxide::{
    prelude::*,
    types::ParseMode,
    utils::{command::BotCommands, html},
};
use tracing::{debug, error, info};
use weatherbot_core::{reply, Config, LookupOutcome, LookupPipeline};

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
enum Command {
    Start,
}

/// Start long polling and dispatch messages until the process is stopped.
pub async fn run(config: &Config, pipeline: LookupPipeline) -> Result<()> {
    let bot = Bot::new(config.bot_token.clone());

    let me = bot.get_me().await?;
    let username = me.username().to_string();
    info!(username = %username, "bot started");

    let pipeline = Arc::new(pipeline);

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let pipeline = pipeline.clone();
        let username = username.clone();

        async move {
            // Reply work runs in its own task so the repl can take the
            // next update immediately.
            tokio::spawn(async move {
                handle_message(bot, msg, &username, pipeline).await;
            });
            Ok(())
        }
    })
    .await;

    Ok(())
}

async fn handle_message(bot: Bot, msg: Message, username: &str, pipeline: Arc<LookupPipeline>) {
    // Stickers, photos and the like get no reply, matching text-only intent.
    let Some(text) = msg.text() else { return };

    info!(chat_id = %msg.chat.id, text = %text, "received message");

    let reply_text = match Command::parse(text, username) {
        Ok(Command::Start) => {
            let name = msg
                .from
                .as_ref()
                .map(|user| user.full_name())
                .unwrap_or_default();
            welcome(&name)
        }
        Err(_) => run_pipeline(&pipeline, text).await,
    };

    if let Err(e) = bot
        .send_message(msg.chat.id, reply_text)
        .parse_mode(ParseMode::Html)
        .await
    {
        error!(chat_id = %msg.chat.id, error = %e, "failed to send reply");
    }
}

async fn run_pipeline(pipeline: &LookupPipeline, text: &str) -> String {
    match pipeline.lookup(text).await {
        Ok(outcome) => {
            if let LookupOutcome::Report { matches, .. } = &outcome {
                debug!(listing = %reply::candidate_listing(matches), "qualifying candidates");
            }
            reply::render_outcome(&outcome)
        }
        Err(e) => {
            error!(error = %e, "lookup failed");
            reply::render_error(&e).to_string()
        }
    }
}

fn welcome(name: &str) -> String {
    format!(
        "Привет, {}! Напиши название города, и я покажу тебе погоду ☀️",
        html::bold(&html::escape(name))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_bolds_and_escapes_the_name() {
        let text = welcome("Ann <script>");
        assert_eq!(
            text,
            "Привет, <b>Ann &lt;script&gt;</b>! Напиши название города, и я покажу тебе погоду ☀️"
        );
    }

    #[test]
    fn start_command_parses_with_and_without_mention() {
        assert!(matches!(Command::parse("/start", "mybot"), Ok(Command::Start)));
        assert!(matches!(Command::parse("/start@mybot", "mybot"), Ok(Command::Start)));
    }

    #[test]
    fn free_text_is_not_a_command() {
        assert!(Command::parse("погода в Москве", "mybot").is_err());
    }
}
