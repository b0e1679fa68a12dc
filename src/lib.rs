//! rarescout - NFT listing rarity monitor.
//!
//! Polls a marketplace feed for new listings in one collection, scores each
//! listed token by the inverse frequency of its traits, and alerts an
//! operator when the score clears a per-collection threshold.
//!
//! # Architecture
//!
//! - [`domain`] - Listings, trait frequencies, scoring, thresholds, dedup ledger
//! - [`port`] - Traits for the listing feed, alert transport, and trait store
//! - [`adapter`] - OpenSea client, Telegram and log notifiers, JSON store, CLI
//! - [`infrastructure`] - Configuration, wiring, and the monitoring loop
//! - [`error`] - Error types and severity classification
//!
//! # Features
//!
//! - `telegram` (default) - Deliver alerts through a Telegram bot
//! - `testkit` - Scripted feed and recording notifier for integration tests
//!
//! # Example
//!
//! ```
//! use rarescout::domain::rarity::{RarityScorer, TotalSupply};
//! use rarescout::domain::traits::{TraitAssertion, TraitFrequencyCache};
//!
//! let cache: TraitFrequencyCache = [("Background", "Blue", 100)].into_iter().collect();
//! let scorer = RarityScorer::new(cache, TotalSupply::new(1000).unwrap());
//! let score = scorer.score(&[TraitAssertion::new("Background", "Blue")]);
//! assert_eq!(score.to_string(), "10.00");
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
