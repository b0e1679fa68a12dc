//! Startup report and announcement.

use tracing::{info, warn};

use super::monitor::MonitorSettings;
use crate::domain::gate::STARTUP_MESSAGE;
use crate::domain::traits::TraitFrequencyCache;
use crate::port::Notifier;

/// Log the resolved run settings.
pub(crate) fn report(settings: &MonitorSettings, cache: &TraitFrequencyCache) {
    info!(
        collection = %settings.collection_slug,
        contract = %settings.contract_address,
        threshold = %settings.threshold.threshold,
        threshold_source = %settings.threshold.source,
        total_supply = settings.total_supply.get(),
        page_size = settings.page_size,
        poll_interval_ms = settings.poll_interval.as_millis() as u64,
        error_backoff_ms = settings.error_backoff.as_millis() as u64,
        "Monitor configured"
    );
    info!(
        categories = cache.category_count(),
        values = cache.value_count(),
        "Trait frequencies loaded"
    );
    match settings.max_seen_listings {
        Some(cap) => info!(max_seen_listings = cap.get(), "Listing ledger capped"),
        None => info!("Listing ledger unbounded"),
    }
    if cache.is_empty() {
        warn!("Trait cache is empty; every listing will score 0.00");
    }
}

/// Send the one-time startup message. Failure is logged only.
pub(crate) async fn announce(notifier: &dyn Notifier) {
    match notifier.send(STARTUP_MESSAGE).await {
        Ok(()) => info!(notifier = notifier.name(), "Startup notification sent"),
        Err(e) => warn!(
            notifier = notifier.name(),
            error = %e,
            "Failed to send startup notification"
        ),
    }
}
