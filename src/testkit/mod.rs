//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`feed`]: Scripted [`ListingFeed`](crate::port::ListingFeed) with call counters.
//! - [`notifier`]: [`RecordingNotifier`](notifier::RecordingNotifier) that keeps every message.
//! - [`domain`]: Builders for feed events, metadata, and trait caches.
//! - [`config`]: Canonical monitor settings with millisecond timings.

pub mod config;
pub mod domain;
pub mod feed;
pub mod notifier;
