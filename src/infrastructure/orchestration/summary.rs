//! Counters reported when a run stops.

use std::fmt;

use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Feed polls attempted.
    pub polls: u64,
    /// Polls that failed and were retried after backoff.
    pub failed_polls: u64,
    /// Raw events received across all polls.
    pub events_received: u64,
    /// Listings admitted to the ledger and processed.
    pub listings_processed: u64,
    /// Listings already in the ledger.
    pub duplicates_skipped: u64,
    /// Events discarded before the ledger (not a listing, no token, no price).
    pub events_skipped: u64,
    /// Listings with no usable metadata.
    pub metadata_misses: u64,
    pub alerts_sent: u64,
    pub alert_failures: u64,
}

impl RunSummary {
    pub fn log(&self) {
        info!(
            polls = self.polls,
            failed_polls = self.failed_polls,
            events_received = self.events_received,
            listings_processed = self.listings_processed,
            duplicates_skipped = self.duplicates_skipped,
            events_skipped = self.events_skipped,
            metadata_misses = self.metadata_misses,
            alerts_sent = self.alerts_sent,
            alert_failures = self.alert_failures,
            "Run summary"
        );
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} polls ({} failed), {} listings processed, {} duplicates, {} alerts sent ({} failed)",
            self.polls,
            self.failed_polls,
            self.listings_processed,
            self.duplicates_skipped,
            self.alerts_sent,
            self.alert_failures,
        )
    }
}
