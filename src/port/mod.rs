//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems (marketplace APIs, alert transports, trait-cache storage).
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │     Monitoring loop     │
//!                    │                         │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              │                         │              │
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │  Feed   │            │ Trait store │              │ Notifier  │
//! │ Adapter │            │   Adapter   │              │  Adapter  │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`ListingFeed`] - Listing events and per-token metadata
//! - [`Notifier`] - Operator alerts (Telegram, logging)
//! - [`TraitStore`] - Trait frequency table persistence

pub mod outbound;

pub use outbound::feed::{FeedQuery, ListingFeed, TokenMetadata, NEW_LISTING_EVENT_TYPE};
pub use outbound::notifier::Notifier;
pub use outbound::store::TraitStore;
