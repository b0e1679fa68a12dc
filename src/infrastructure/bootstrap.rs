//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;
#[cfg(feature = "telegram")]
use tracing::warn;

#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::{TelegramConfig, TelegramNotifier};
use crate::adapter::outbound::notifier::LogNotifier;
use crate::adapter::outbound::opensea::OpenSeaClient;
use crate::adapter::outbound::store::JsonTraitStore;
use crate::infrastructure::config::settings::Config;
use crate::port::{ListingFeed, Notifier, TraitStore};

/// Build the listing feed client.
pub fn build_feed(config: &Config) -> Arc<dyn ListingFeed> {
    info!(
        api_url = %config.opensea.api_url,
        api_key = config.opensea.api_key.is_some(),
        "OpenSea client configured"
    );
    Arc::new(OpenSeaClient::from_config(&config.opensea))
}

/// Build the alert notifier.
///
/// Uses Telegram when credentials are configured, the log otherwise.
#[cfg(feature = "telegram")]
pub fn build_notifier(config: &Config) -> Arc<dyn Notifier> {
    match (&config.telegram.bot_token, config.telegram.chat_id) {
        (Some(bot_token), Some(chat_id)) => Arc::new(TelegramNotifier::new(&TelegramConfig {
            bot_token: bot_token.clone(),
            chat_id,
        })),
        _ => {
            warn!("Telegram credentials not set, alerts will only be logged");
            Arc::new(LogNotifier)
        }
    }
}

/// Build the alert notifier (non-telegram variant).
#[cfg(not(feature = "telegram"))]
pub fn build_notifier(_config: &Config) -> Arc<dyn Notifier> {
    info!("Built without telegram support, alerts will only be logged");
    Arc::new(LogNotifier)
}

/// Build the trait frequency store.
pub fn build_trait_store(config: &Config) -> Arc<dyn TraitStore> {
    Arc::new(JsonTraitStore::new(&config.monitor.trait_cache_path))
}
