//! Builders for domain primitives: feed events, metadata, trait caches.

use crate::domain::listing::FeedEvent;
use crate::domain::traits::{TraitAssertion, TraitFrequencyCache};
use crate::port::TokenMetadata;

pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Wei amount for a price given in thousandths of an ETH.
pub const fn milli_eth(milli: u128) -> u128 {
    milli * (WEI_PER_ETH / 1_000)
}

/// A new-listing order event with name and permalink.
pub fn listing_event(token_id: &str, price_wei: u128) -> FeedEvent {
    FeedEvent {
        event_type: Some("order".into()),
        order_type: Some("listing".into()),
        token_id: Some(token_id.into()),
        name: Some(format!("Test #{token_id}")),
        price_wei: Some(price_wei),
        permalink: Some(format!("https://opensea.io/item/{token_id}")),
    }
}

/// A listing event whose price could not be read.
pub fn unpriced_listing(token_id: &str) -> FeedEvent {
    FeedEvent {
        price_wei: None,
        ..listing_event(token_id, 0)
    }
}

/// A sale event for the same token shape.
pub fn sale_event(token_id: &str, price_wei: u128) -> FeedEvent {
    FeedEvent {
        event_type: Some("sale".into()),
        order_type: None,
        ..listing_event(token_id, price_wei)
    }
}

pub fn metadata(traits: &[(&str, &str)]) -> TokenMetadata {
    TokenMetadata {
        traits: traits
            .iter()
            .map(|(category, value)| TraitAssertion::new(*category, *value))
            .collect(),
    }
}

pub fn cache(entries: &[(&str, &str, u64)]) -> TraitFrequencyCache {
    entries.iter().copied().collect()
}
