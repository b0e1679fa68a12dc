//! Canonical monitor settings for tests.

use std::time::Duration;

use crate::domain::rarity::TotalSupply;
use crate::domain::threshold::resolve_threshold;
use crate::infrastructure::orchestration::MonitorSettings;

pub const TEST_COLLECTION: &str = "test-collection";
pub const TEST_CONTRACT: &str = "0x0000000000000000000000000000000000000001";
pub const TEST_SUPPLY: i64 = 1_000;

/// Settings with a fixed threshold, supply 1000, and millisecond timings.
pub fn monitor_settings(threshold: f64) -> MonitorSettings {
    MonitorSettings {
        collection_slug: TEST_COLLECTION.into(),
        contract_address: TEST_CONTRACT.into(),
        threshold: resolve_threshold(Some(TEST_COLLECTION), Some(threshold)).unwrap(),
        total_supply: TotalSupply::new(TEST_SUPPLY).unwrap(),
        page_size: 25,
        poll_interval: Duration::from_millis(10),
        error_backoff: Duration::from_millis(20),
        max_seen_listings: None,
    }
}

/// Same as [`monitor_settings`] with long sleeps, for cancellation tests.
pub fn slow_monitor_settings(threshold: f64) -> MonitorSettings {
    MonitorSettings {
        poll_interval: Duration::from_secs(30),
        error_backoff: Duration::from_secs(30),
        ..monitor_settings(threshold)
    }
}
