//! Telegram notifier.
//!
//! Sends each alert as a plain-text message, link previews off, to a single
//! chat. Delivery is awaited so the monitor can log failures per alert.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::LinkPreviewOptions;
use tracing::info;

use crate::error::NotifyError;
use crate::port::Notifier;

/// Configuration for the Telegram notifier.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat ID for alerts.
    pub chat_id: i64,
}

/// Telegram notifier that sends messages to a chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(config: &TelegramConfig) -> Self {
        info!(chat_id = config.chat_id, "Telegram notifier ready");
        Self {
            bot: Bot::new(&config.bot_token),
            chat_id: ChatId(config.chat_id),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        self.bot
            .send_message(self.chat_id, text)
            .link_preview_options(LinkPreviewOptions {
                is_disabled: true,
                url: None,
                prefer_small_media: false,
                prefer_large_media: false,
                show_above_text: false,
            })
            .await
            .map(|_| ())
            .map_err(|e| match e {
                teloxide::RequestError::Network(err) => NotifyError::Unavailable(err.to_string()),
                other => NotifyError::Rejected(other.to_string()),
            })
    }

    fn name(&self) -> &'static str {
        "telegram"
    }
}
