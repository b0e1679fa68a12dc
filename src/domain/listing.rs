//! Listing events and their deduplication identity.
//!
//! A [`FeedEvent`] is whatever the marketplace feed returned, with every
//! field optional. [`FeedEvent::into_listing`] admits it as a
//! [`ListingEvent`] only when it is a new-listing order with a token id and
//! a resolvable price.

use rust_decimal::Decimal;
use thiserror::Error;

/// Decimal places between the smallest currency unit (wei) and one whole unit.
pub const WEI_DECIMALS: u32 = 18;

const LISTING_EVENT_TYPE: &str = "order";
const LISTING_ORDER_TYPE: &str = "listing";

/// A raw event as returned by the listing feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEvent {
    pub event_type: Option<String>,
    pub order_type: Option<String>,
    pub token_id: Option<String>,
    pub name: Option<String>,
    pub price_wei: Option<u128>,
    pub permalink: Option<String>,
}

/// Why a feed event was not admitted as a listing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("not a new-listing order")]
    NotAListing,

    #[error("event has no token id")]
    MissingToken,

    #[error("listing for token {token_id} has no price")]
    MissingPrice { token_id: String },

    #[error("listing for token {token_id} has out-of-range price {wei}")]
    PriceOutOfRange { token_id: String, wei: u128 },
}

impl FeedEvent {
    /// Whether this is an `order` event of kind `listing`.
    #[must_use]
    pub fn is_new_listing(&self) -> bool {
        self.event_type.as_deref() == Some(LISTING_EVENT_TYPE)
            && self.order_type.as_deref() == Some(LISTING_ORDER_TYPE)
    }

    /// Admit this event as a listing.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] describing why the event cannot be processed.
    pub fn into_listing(self) -> Result<ListingEvent, Rejection> {
        if !self.is_new_listing() {
            return Err(Rejection::NotAListing);
        }
        let token_id = self
            .token_id
            .filter(|id| !id.is_empty())
            .ok_or(Rejection::MissingToken)?;
        let Some(price_wei) = self.price_wei else {
            return Err(Rejection::MissingPrice { token_id });
        };
        let Some(price) = wei_to_decimal(price_wei) else {
            return Err(Rejection::PriceOutOfRange {
                token_id,
                wei: price_wei,
            });
        };
        let display_name = self
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("Token #{token_id}"));

        Ok(ListingEvent {
            token_id,
            display_name,
            price,
            permalink: self.permalink.filter(|link| !link.is_empty()),
        })
    }
}

/// Convert an integer wei amount to a normalized decimal price.
#[must_use]
pub fn wei_to_decimal(wei: u128) -> Option<Decimal> {
    let wei = i128::try_from(wei).ok()?;
    Decimal::try_from_i128_with_scale(wei, WEI_DECIMALS)
        .ok()
        .map(|d| d.normalize())
}

/// A marketplace listing admitted for scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEvent {
    token_id: String,
    display_name: String,
    price: Decimal,
    permalink: Option<String>,
}

impl ListingEvent {
    #[must_use]
    pub fn token_id(&self) -> &str {
        &self.token_id
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Price in whole currency units.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }

    #[must_use]
    pub fn permalink(&self) -> Option<&str> {
        self.permalink.as_deref()
    }

    #[must_use]
    pub fn identity(&self) -> ListingIdentity {
        ListingIdentity {
            token_id: self.token_id.clone(),
            price: self.price,
        }
    }
}

/// Dedup key: the same token re-listed at a new price is a new listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingIdentity {
    token_id: String,
    price: Decimal,
}

impl ListingIdentity {
    pub fn new(token_id: impl Into<String>, price: Decimal) -> Self {
        Self {
            token_id: token_id.into(),
            price: price.normalize(),
        }
    }
}

impl std::fmt::Display for ListingIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.token_id, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const ONE_ETH: u128 = 1_000_000_000_000_000_000;

    fn listing(token: &str, wei: Option<u128>) -> FeedEvent {
        FeedEvent {
            event_type: Some("order".into()),
            order_type: Some("listing".into()),
            token_id: Some(token.into()),
            name: None,
            price_wei: wei,
            permalink: None,
        }
    }

    #[test]
    fn admits_listing_with_default_name() {
        let event = listing("42", Some(ONE_ETH)).into_listing().unwrap();
        assert_eq!(event.display_name(), "Token #42");
        assert_eq!(event.price(), dec!(1));
        assert_eq!(event.permalink(), None);
    }

    #[test]
    fn rejects_non_listing_events() {
        let mut sale = listing("1", Some(ONE_ETH));
        sale.order_type = Some("offer".into());
        assert_eq!(sale.into_listing(), Err(Rejection::NotAListing));

        let mut transfer = listing("1", Some(ONE_ETH));
        transfer.event_type = Some("transfer".into());
        assert_eq!(transfer.into_listing(), Err(Rejection::NotAListing));
    }

    #[test]
    fn rejects_listing_without_price() {
        assert_eq!(
            listing("9", None).into_listing(),
            Err(Rejection::MissingPrice {
                token_id: "9".into()
            })
        );
    }

    #[test]
    fn rejects_listing_without_token() {
        let mut event = listing("", Some(ONE_ETH));
        assert_eq!(event.clone().into_listing(), Err(Rejection::MissingToken));
        event.token_id = None;
        assert_eq!(event.into_listing(), Err(Rejection::MissingToken));
    }

    #[test]
    fn identity_distinguishes_price() {
        let a = listing("7", Some(ONE_ETH)).into_listing().unwrap();
        let b = listing("7", Some(ONE_ETH * 3 / 2)).into_listing().unwrap();
        let c = listing("7", Some(ONE_ETH)).into_listing().unwrap();

        assert_ne!(a.identity(), b.identity());
        assert_eq!(a.identity(), c.identity());
        assert_eq!(b.identity().to_string(), "7@1.5");
    }

    #[test]
    fn identity_normalizes_scale() {
        assert_eq!(
            ListingIdentity::new("7", dec!(1.50)),
            ListingIdentity::new("7", dec!(1.5))
        );
    }

    #[test]
    fn converts_fractional_wei() {
        assert_eq!(wei_to_decimal(1), Some(dec!(0.000000000000000001)));
        assert_eq!(wei_to_decimal(u128::MAX), None);
    }
}
