//! Alert decision and payload formatting.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use super::listing::ListingEvent;
use super::rarity::RarityScore;
use super::threshold::ScoreThreshold;

/// Text delivered once when a run starts.
pub const STARTUP_MESSAGE: &str = "🤖 Rarity monitor is now running and watching listings.";

const MISSING_LINK: &str = "no link available";

/// Inclusive threshold check.
#[must_use]
pub fn should_alert(score: RarityScore, threshold: ScoreThreshold) -> bool {
    score.value() >= threshold.value()
}

/// Threshold check bound to one run's threshold.
#[derive(Debug, Clone, Copy)]
pub struct AlertGate {
    threshold: ScoreThreshold,
}

impl AlertGate {
    #[must_use]
    pub const fn new(threshold: ScoreThreshold) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub const fn threshold(&self) -> ScoreThreshold {
        self.threshold
    }

    /// Build the alert for a listing, or `None` when the score is below threshold.
    #[must_use]
    pub fn evaluate(&self, listing: &ListingEvent, score: RarityScore) -> Option<AlertPayload> {
        should_alert(score, self.threshold).then(|| AlertPayload {
            display_name: listing.display_name().to_string(),
            score,
            price: listing.price(),
            permalink: listing.permalink().map(str::to_string),
        })
    }
}

/// A high-score listing ready for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertPayload {
    pub display_name: String,
    pub score: RarityScore,
    pub price: Decimal,
    pub permalink: Option<String>,
}

impl AlertPayload {
    /// Operator-facing message text.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "🚨 HIGH SCORE LISTING 🚨\n\
            \n\
            🎯 Name: {}\n\
            🏆 Rarity score: {}\n\
            💰 Price: {:.4} ETH\n\
            🔗 Link: {}",
            self.display_name,
            self.score,
            self.price
                .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero),
            self.permalink.as_deref().unwrap_or(MISSING_LINK),
        )
    }
}

impl fmt::Display for AlertPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
