//! Telegram notification configuration.

use serde::Deserialize;

/// Telegram alert destination.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramAppConfig {
    /// Chat that receives alerts (`TELEGRAM_USER_ID` or `TELEGRAM_CHAT_ID`).
    #[serde(default)]
    pub chat_id: Option<i64>,
    /// Bot token, loaded from `TELEGRAM_BOT_TOKEN` (never from the config file).
    #[serde(skip)]
    pub bot_token: Option<String>,
}
