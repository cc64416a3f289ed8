//! Bot initialization
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Startup wait for the Bot API

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::types::{BotCommand, Me};
use teloxide::utils::command::BotCommands;
use tokio::time::sleep;

use dircore::config;

use super::Bot;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Я умею:")]
pub enum Command {
    #[command(description = "показывает меню папок")]
    Start,
}

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Token missing, invalid BOT_API_URL, or HTTP client failure
pub fn create_bot() -> anyhow::Result<Bot> {
    let token = config::BOT_TOKEN.as_str();
    if token.is_empty() {
        return Err(anyhow::anyhow!("BOT_TOKEN environment variable not set"));
    }

    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    let bot = Bot::with_client(token, client);

    let bot = if let Some(bot_api_url) = config::BOT_API_URL.as_deref() {
        log::info!("Using custom Bot API URL: {}", bot_api_url);
        let url = url::Url::parse(bot_api_url).map_err(|e| anyhow::anyhow!("Invalid BOT_API_URL: {}", e))?;
        bot.set_api_url(url)
    } else {
        bot
    };

    Ok(bot)
}

/// Sets up bot commands in Telegram UI
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(vec![BotCommand::new("start", "показывает меню папок")])
        .await?;

    Ok(())
}

/// Calls `getMe` until the Bot API answers.
///
/// A local Bot API server may still be starting, so connection-type failures
/// are retried; anything else (bad token) fails immediately.
pub async fn wait_for_bot_api(bot: &Bot) -> anyhow::Result<Me> {
    let mut attempt = 0;
    loop {
        match bot.get_me().await {
            Ok(me) => return Ok(me),
            Err(e) => {
                attempt += 1;
                let err_str = e.to_string();
                if attempt >= config::retry::STARTUP_MAX_RETRIES || !is_retryable_startup_error(&err_str) {
                    return Err(anyhow::anyhow!(
                        "Failed to connect to Bot API after {} attempt(s): {}",
                        attempt,
                        e
                    ));
                }

                log::warn!(
                    "Bot API not ready (attempt {}/{}): {}. Retrying in {} seconds...",
                    attempt,
                    config::retry::STARTUP_MAX_RETRIES,
                    err_str,
                    config::retry::STARTUP_RETRY_DELAY_SECS
                );
                sleep(config::retry::startup_delay()).await;
            }
        }
    }
}

fn is_retryable_startup_error(err_str: &str) -> bool {
    let lower = err_str.to_lowercase();
    ["restart", "network", "connection", "timed out", "connection refused"]
        .iter()
        .any(|needle| lower.contains(needle))
}
