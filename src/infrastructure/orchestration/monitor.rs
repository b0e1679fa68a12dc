//! The monitoring loop.
//!
//! One [`Monitor`] owns a run: it polls the feed, admits each new listing
//! through the ledger, scores it, and dispatches an alert when the score
//! clears the threshold. Every await point races the shutdown signal, so a
//! stop request ends the run within one short interval.
//!
//! ```text
//! STARTING -> POLLING -> PROCESSING_EVENTS -> SLEEPING -> POLLING ...
//!                                   (any state) -> STOPPED
//! ```

use std::any::Any;
use std::num::NonZeroUsize;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use tracing::{debug, error, info, warn};

use super::shutdown::{Shutdown, SleepOutcome};
use super::startup;
use super::summary::RunSummary;
use crate::domain::gate::AlertGate;
use crate::domain::ledger::ListingLedger;
use crate::domain::listing::{FeedEvent, Rejection};
use crate::domain::rarity::{RarityScorer, TotalSupply};
use crate::domain::threshold::ResolvedThreshold;
use crate::domain::traits::TraitFrequencyCache;
use crate::error::{Error, FeedError, ItemError, Result, Severity};
use crate::port::{FeedQuery, ListingFeed, Notifier};

/// Validated inputs for one run.
#[derive(Debug, Clone)]
pub struct MonitorSettings {
    pub collection_slug: String,
    pub contract_address: String,
    pub threshold: ResolvedThreshold,
    pub total_supply: TotalSupply,
    /// Events requested per poll.
    pub page_size: u32,
    /// Pause between successful polls.
    pub poll_interval: Duration,
    /// Pause after a failed poll.
    pub error_backoff: Duration,
    /// Optional ledger cap.
    pub max_seen_listings: Option<NonZeroUsize>,
}

/// What the loop does after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

pub struct Monitor {
    settings: MonitorSettings,
    feed: Arc<dyn ListingFeed>,
    notifier: Arc<dyn Notifier>,
    scorer: RarityScorer,
    gate: AlertGate,
    ledger: ListingLedger,
    shutdown: Shutdown,
    summary: RunSummary,
}

impl Monitor {
    #[must_use]
    pub fn new(
        settings: MonitorSettings,
        cache: TraitFrequencyCache,
        feed: Arc<dyn ListingFeed>,
        notifier: Arc<dyn Notifier>,
        shutdown: Shutdown,
    ) -> Self {
        let ledger = match settings.max_seen_listings {
            Some(cap) => ListingLedger::with_max_entries(cap),
            None => ListingLedger::new(),
        };
        Self {
            scorer: RarityScorer::new(cache, settings.total_supply),
            gate: AlertGate::new(settings.threshold.threshold),
            settings,
            feed,
            notifier,
            ledger,
            shutdown,
            summary: RunSummary::default(),
        }
    }

    /// Run until shutdown is requested, then return the run's counters.
    pub async fn run(mut self) -> RunSummary {
        startup::report(&self.settings, self.scorer.cache());

        tokio::select! {
            biased;
            () = self.shutdown.stopped() => {}
            () = startup::announce(self.notifier.as_ref()) => {}
        }

        info!(
            collection = %self.settings.collection_slug,
            feed = self.feed.feed_name(),
            "Monitoring started"
        );

        while !self.shutdown.is_stopped() {
            let outcome = AssertUnwindSafe(self.poll_once()).catch_unwind().await;

            let pause = match outcome {
                Ok(Ok(Flow::Continue)) => self.settings.poll_interval,
                Ok(Ok(Flow::Stop)) => break,
                Ok(Err(e)) if e.severity() == Severity::Cancelled => break,
                Ok(Err(e)) => {
                    self.summary.failed_polls += 1;
                    warn!(
                        error = %e,
                        backoff_ms = self.settings.error_backoff.as_millis() as u64,
                        "Poll failed, backing off"
                    );
                    self.settings.error_backoff
                }
                Err(panic) => {
                    self.summary.failed_polls += 1;
                    let e = Error::Panicked(panic_message(panic.as_ref()));
                    error!(
                        error = %e,
                        backoff_ms = self.settings.error_backoff.as_millis() as u64,
                        "Monitor cycle panicked, backing off"
                    );
                    self.settings.error_backoff
                }
            };

            if self.shutdown.sleep(pause).await == SleepOutcome::Stopped {
                break;
            }
        }

        info!(
            seen_listings = self.ledger.len(),
            evicted = self.ledger.evicted(),
            "Monitor stopped gracefully"
        );
        self.summary.log();
        self.summary
    }

    /// One poll and the processing of every event it returned.
    async fn poll_once(&mut self) -> Result<Flow> {
        self.summary.polls += 1;
        let query = FeedQuery::new_listings(&self.settings.collection_slug, self.settings.page_size);

        let events = tokio::select! {
            biased;
            () = self.shutdown.stopped() => return Err(FeedError::Cancelled.into()),
            result = self.feed.fetch_events(&query) => result?,
        };

        self.summary.events_received += events.len() as u64;
        debug!(count = events.len(), "Fetched feed events");

        for event in events {
            if self.shutdown.is_stopped() {
                return Ok(Flow::Stop);
            }
            match self.process_event(event).await {
                Ok(Flow::Stop) => return Ok(Flow::Stop),
                Ok(Flow::Continue) => {}
                Err(e) => self.record_item_error(&e),
            }
        }

        Ok(Flow::Continue)
    }

    /// Ledger, metadata, score, gate, dispatch for a single event.
    async fn process_event(&mut self, event: FeedEvent) -> std::result::Result<Flow, ItemError> {
        let listing = event.into_listing()?;

        if !self.ledger.admit(listing.identity()) {
            self.summary.duplicates_skipped += 1;
            debug!(listing = %listing.identity(), "Listing already processed");
            return Ok(Flow::Continue);
        }
        self.summary.listings_processed += 1;
        info!(
            token_id = listing.token_id(),
            name = listing.display_name(),
            price = %listing.price(),
            "New listing"
        );

        let metadata = tokio::select! {
            biased;
            () = self.shutdown.stopped() => return Ok(Flow::Stop),
            metadata = self.feed.fetch_metadata(
                listing.token_id(),
                &self.settings.contract_address,
            ) => metadata,
        };
        let Some(metadata) = metadata else {
            return Err(ItemError::MissingMetadata {
                token_id: listing.token_id().to_string(),
            });
        };
        if metadata.traits.is_empty() {
            return Err(ItemError::NoTraits {
                token_id: listing.token_id().to_string(),
            });
        }

        let score = self.scorer.score(&metadata.traits);
        info!(
            token_id = listing.token_id(),
            score = %score,
            threshold = %self.gate.threshold(),
            "Scored listing"
        );

        let Some(alert) = self.gate.evaluate(&listing, score) else {
            return Ok(Flow::Continue);
        };

        let message = alert.message();
        let sent = tokio::select! {
            biased;
            () = self.shutdown.stopped() => return Ok(Flow::Stop),
            sent = self.notifier.send(&message) => sent,
        };
        sent?;

        self.summary.alerts_sent += 1;
        info!(token_id = listing.token_id(), score = %score, "Alert sent");
        Ok(Flow::Continue)
    }

    fn record_item_error(&mut self, e: &ItemError) {
        match e {
            ItemError::Skipped(Rejection::NotAListing) => {
                self.summary.events_skipped += 1;
                debug!("Skipping non-listing event");
            }
            ItemError::Skipped(rejection) => {
                self.summary.events_skipped += 1;
                warn!(reason = %rejection, "Skipping event");
            }
            ItemError::MissingMetadata { token_id } | ItemError::NoTraits { token_id } => {
                self.summary.metadata_misses += 1;
                warn!(token_id = %token_id, error = %e, "Skipping listing");
            }
            ItemError::Dispatch(err) => {
                self.summary.alert_failures += 1;
                error!(error = %err, "Failed to send alert");
            }
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
