//! Listing feed port.
//!
//! The monitor polls a feed for recent listing events and asks it for the
//! metadata of each new token. Implementations own transport details such
//! as authentication headers and request timeouts.

use async_trait::async_trait;

use crate::domain::listing::FeedEvent;
use crate::domain::traits::TraitAssertion;
use crate::error::FeedError;

/// Event type requested from the feed when polling for new listings.
pub const NEW_LISTING_EVENT_TYPE: &str = "item_listed";

/// Parameters for one poll of the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    /// Collection identifier (slug).
    pub collection: String,
    /// Event type filter.
    pub event_type: String,
    /// Maximum events per page.
    pub limit: u32,
}

impl FeedQuery {
    /// Query for the newest listings in a collection.
    pub fn new_listings(collection: impl Into<String>, limit: u32) -> Self {
        Self {
            collection: collection.into(),
            event_type: NEW_LISTING_EVENT_TYPE.to_string(),
            limit,
        }
    }
}

/// Metadata for one token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMetadata {
    pub traits: Vec<TraitAssertion>,
}

/// Source of listing events and token metadata.
#[async_trait]
pub trait ListingFeed: Send + Sync {
    /// Fetch one page of events, in the order the feed returns them.
    async fn fetch_events(&self, query: &FeedQuery) -> Result<Vec<FeedEvent>, FeedError>;

    /// Fetch a token's metadata.
    ///
    /// Any failure is reported as `None`; implementations log the cause.
    async fn fetch_metadata(&self, token_id: &str, contract_address: &str)
        -> Option<TokenMetadata>;

    /// Feed name for logging.
    fn feed_name(&self) -> &'static str;
}
