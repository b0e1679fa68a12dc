use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Test Telegram notification by sending a test message.
#[cfg(feature = "telegram")]
pub async fn execute_telegram(config_path: Option<&Path>) -> Result<()> {
    use crate::adapter::outbound::notifier::telegram::{TelegramConfig, TelegramNotifier};
    use crate::error::ConfigError;
    use crate::infrastructure::config::settings::{ENV_TELEGRAM_BOT_TOKEN, ENV_TELEGRAM_USER_ID};
    use crate::port::Notifier;

    let config = Config::discover(config_path)?;

    let mut missing = Vec::new();
    if config.telegram.bot_token.is_none() {
        missing.push(ENV_TELEGRAM_BOT_TOKEN);
    }
    if config.telegram.chat_id.is_none() {
        missing.push(ENV_TELEGRAM_USER_ID);
    }
    let (Some(bot_token), Some(chat_id)) =
        (config.telegram.bot_token.clone(), config.telegram.chat_id)
    else {
        return Err(ConfigError::MissingFields { fields: missing }.into());
    };

    output::section("Telegram Check");
    output::field("Bot token", mask_token(&bot_token));
    output::field("Chat ID", chat_id);

    let notifier = TelegramNotifier::new(&TelegramConfig { bot_token, chat_id });
    let message = format!(
        "🧪 rarescout test message\n\nCollection: {}",
        config.collection.slug.as_deref().unwrap_or("not set")
    );
    notifier.send(&message).await?;

    output::success("Telegram test message sent");
    output::hint("check Telegram for the message");
    Ok(())
}

/// Test Telegram notification (non-telegram build).
#[cfg(not(feature = "telegram"))]
pub async fn execute_telegram(config_path: Option<&Path>) -> Result<()> {
    use crate::error::ConfigError;

    Config::discover(config_path)?;
    Err(ConfigError::InvalidValue {
        field: "telegram",
        reason: "rarescout was built without the telegram feature".to_string(),
    }
    .into())
}

#[cfg_attr(not(feature = "telegram"), allow(dead_code))]
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() >= 15 {
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 5..].iter().collect();
        format!("{head}...{tail}")
    } else {
        let head: String = chars.iter().take(4).collect();
        format!("{head}...")
    }
}
