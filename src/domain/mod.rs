//! Marketplace-agnostic domain logic: listings, traits, scoring, alerting.

pub mod error;
pub mod gate;
pub mod ledger;
pub mod listing;
pub mod rarity;
pub mod threshold;
pub mod traits;

pub use gate::{should_alert, AlertGate, AlertPayload};
pub use ledger::ListingLedger;
pub use listing::{FeedEvent, ListingEvent, ListingIdentity, Rejection};
pub use rarity::{RarityScore, RarityScorer, TotalSupply};
pub use threshold::{resolve_threshold, ResolvedThreshold, ScoreThreshold, ThresholdSource};
pub use traits::{TraitAssertion, TraitFrequencyCache};
