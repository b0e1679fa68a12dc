//! Watched collection configuration.

use serde::Deserialize;

/// The collection being monitored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Marketplace collection slug (`COLLECTION_SLUG`).
    pub slug: Option<String>,
    /// Token contract address used for metadata lookups (`CONTRACT_ADDRESS`).
    pub contract_address: Option<String>,
    /// Number of tokens in the collection (`TOTAL_SUPPLY`).
    pub total_supply: i64,
    /// Explicit score threshold (`MIN_SCORE_THRESHOLD`). When unset the
    /// per-collection table decides.
    pub min_score_threshold: Option<f64>,
}

pub const DEFAULT_TOTAL_SUPPLY: i64 = 4269;

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            slug: None,
            contract_address: None,
            total_supply: DEFAULT_TOTAL_SUPPLY,
            min_score_threshold: None,
        }
    }
}
