//! OpenSea REST response types.
//!
//! Only the fields the monitor reads are modelled. Identifiers and prices
//! arrive as either strings or numbers, so they are kept as raw JSON values
//! and normalized on conversion.
//!
//! Example event:
//! ```json
//! {"event_type":"order","order_type":"listing",
//!  "asset":{"identifier":"42","name":"Milady #42","opensea_url":"https://..."},
//!  "payment":{"quantity":"1500000000000000000"}}
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::listing::FeedEvent;
use crate::domain::traits::TraitAssertion;
use crate::port::TokenMetadata;

/// Envelope returned by `GET /events`.
///
/// Entries stay untyped until [`EventsResponse::into_feed_events`] so that
/// one malformed event cannot discard the rest of the page.
#[derive(Debug, Default, Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub asset_events: Vec<Value>,
}

impl EventsResponse {
    /// Decode each entry on its own, dropping the ones that do not parse.
    pub fn into_feed_events(self) -> Vec<FeedEvent> {
        self.asset_events
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| match serde_json::from_value::<RawEvent>(raw) {
                Ok(event) => Some(FeedEvent::from(event)),
                Err(err) => {
                    warn!(index, error = %err, "Skipping malformed feed event");
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RawEvent {
    pub event_type: Option<String>,
    pub order_type: Option<String>,
    #[serde(alias = "nft")]
    pub asset: Option<RawAsset>,
    pub payment: Option<RawPayment>,
    pub starting_price: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawAsset {
    pub identifier: Option<Value>,
    pub token_id: Option<Value>,
    pub name: Option<String>,
    pub opensea_url: Option<String>,
    pub permalink: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPayment {
    pub quantity: Option<Value>,
}

impl From<RawEvent> for FeedEvent {
    fn from(event: RawEvent) -> Self {
        let asset = event.asset.unwrap_or_default();
        let price_wei = event
            .payment
            .and_then(|p| p.quantity)
            .as_ref()
            .and_then(parse_wei)
            .or_else(|| event.starting_price.as_ref().and_then(parse_wei));

        Self {
            event_type: event.event_type,
            order_type: event.order_type,
            token_id: asset
                .identifier
                .as_ref()
                .and_then(value_to_string)
                .or_else(|| asset.token_id.as_ref().and_then(value_to_string)),
            name: asset.name,
            price_wei,
            permalink: asset.opensea_url.or(asset.permalink),
        }
    }
}

/// Response from `GET /asset/{contract}/{token_id}`.
///
/// Traits may sit at the top level or under `nft`.
#[derive(Debug, Default, Deserialize)]
pub struct MetadataResponse {
    pub traits: Option<Vec<RawTrait>>,
    pub nft: Option<NestedNft>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NestedNft {
    pub traits: Option<Vec<RawTrait>>,
}

#[derive(Debug, Deserialize)]
pub struct RawTrait {
    pub trait_type: Option<String>,
    pub value: Option<Value>,
}

impl From<MetadataResponse> for TokenMetadata {
    fn from(response: MetadataResponse) -> Self {
        let traits = response
            .traits
            .or_else(|| response.nft.and_then(|n| n.traits))
            .unwrap_or_default()
            .into_iter()
            .map(|t| {
                TraitAssertion::new(
                    t.trait_type.unwrap_or_default(),
                    t.value.as_ref().and_then(value_to_string).unwrap_or_default(),
                )
            })
            .collect();
        Self { traits }
    }
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse an integer wei amount from a string or number.
///
/// Decimal strings such as `"1500000000000000000.0"` are truncated.
fn parse_wei(value: &Value) -> Option<u128> {
    let raw = value_to_string(value)?;
    raw.parse::<u128>().ok().or_else(|| {
        raw.parse::<Decimal>()
            .ok()
            .filter(|d| !d.is_sign_negative())
            .and_then(|d| d.trunc().to_u128())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENT: &str = r#"{
        "event_type": "order",
        "order_type": "listing",
        "asset": {
            "identifier": "42",
            "name": "Milady #42",
            "opensea_url": "https://opensea.io/assets/ethereum/0xabc/42"
        },
        "payment": {"quantity": "1500000000000000000"}
    }"#;

    #[test]
    fn converts_listing_event() {
        let raw: RawEvent = serde_json::from_str(EVENT).unwrap();
        let event = FeedEvent::from(raw);

        assert_eq!(event.token_id.as_deref(), Some("42"));
        assert_eq!(event.name.as_deref(), Some("Milady #42"));
        assert_eq!(event.price_wei, Some(1_500_000_000_000_000_000));
        assert!(event.is_new_listing());
    }

    #[test]
    fn falls_back_to_alternate_fields() {
        let json = r#"{
            "event_type": "order",
            "order_type": "listing",
            "nft": {"token_id": 7, "permalink": "https://example.com/7"},
            "starting_price": 2000000000000000000
        }"#;
        let event = FeedEvent::from(serde_json::from_str::<RawEvent>(json).unwrap());

        assert_eq!(event.token_id.as_deref(), Some("7"));
        assert_eq!(event.permalink.as_deref(), Some("https://example.com/7"));
        assert_eq!(event.price_wei, Some(2_000_000_000_000_000_000));
        assert_eq!(event.name, None);
    }

    #[test]
    fn missing_price_stays_missing() {
        let json = r#"{"event_type": "order", "order_type": "listing", "asset": {"identifier": "1"}}"#;
        let event = FeedEvent::from(serde_json::from_str::<RawEvent>(json).unwrap());
        assert_eq!(event.price_wei, None);
    }

    #[test]
    fn parses_decimal_wei_strings() {
        assert_eq!(
            parse_wei(&Value::String("1500000000000000000.0".into())),
            Some(1_500_000_000_000_000_000)
        );
        assert_eq!(parse_wei(&Value::String("-5".into())), None);
        assert_eq!(parse_wei(&Value::String("abc".into())), None);
    }

    #[test]
    fn malformed_event_does_not_drop_the_page() {
        let page = r#"{"asset_events": [
            {"event_type": "order", "order_type": "listing", "asset": {"identifier": "1", "name": 42}},
            {"event_type": "order", "order_type": "listing", "asset": {"identifier": "2"},
             "payment": {"quantity": "1000000000000000000"}}
        ]}"#;

        let events = serde_json::from_str::<EventsResponse>(page)
            .unwrap()
            .into_feed_events();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].token_id.as_deref(), Some("2"));
        assert_eq!(events[0].price_wei, Some(1_000_000_000_000_000_000));
    }

    #[test]
    fn envelope_defaults_to_empty() {
        let response: EventsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.asset_events.is_empty());
    }

    #[test]
    fn metadata_reads_top_level_or_nested_traits() {
        let top = r#"{"traits": [{"trait_type": "Background", "value": "Blue"}, {"trait_type": "Level", "value": 3}]}"#;
        let nested = r#"{"nft": {"traits": [{"trait_type": "Background", "value": "Blue"}]}}"#;

        let top: TokenMetadata = serde_json::from_str::<MetadataResponse>(top).unwrap().into();
        let nested: TokenMetadata = serde_json::from_str::<MetadataResponse>(nested)
            .unwrap()
            .into();

        assert_eq!(
            top.traits,
            vec![
                TraitAssertion::new("Background", "Blue"),
                TraitAssertion::new("Level", "3"),
            ]
        );
        assert_eq!(nested.traits, vec![TraitAssertion::new("Background", "Blue")]);
    }
}
