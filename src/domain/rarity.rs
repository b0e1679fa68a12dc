//! Rarity scoring from inverse trait frequency.
//!
//! # Scoring System
//!
//! Each trait found in the frequency table contributes the inverse of its
//! rarity fraction, `total_supply / occurrences`. The sum is divided by the
//! number of traits that contributed, so tokens with many traits are not
//! favoured over tokens with few. Traits absent from the table contribute
//! nothing and do not count toward the divisor.
//!
//! # Examples
//!
//! ```
//! use rarescout::domain::rarity::{score, TotalSupply};
//! use rarescout::domain::traits::{TraitAssertion, TraitFrequencyCache};
//!
//! let cache: TraitFrequencyCache = [("Background", "Blue", 100)].into_iter().collect();
//! let supply = TotalSupply::new(1000).unwrap();
//! let traits = [TraitAssertion::new("Background", "Blue")];
//!
//! assert_eq!(score(&traits, &cache, supply).value(), 10.0);
//! ```

use std::fmt;
use std::num::NonZeroU64;

use super::error::DomainError;
use super::traits::{TraitAssertion, TraitFrequencyCache};

/// Number of tokens in the collection. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalSupply(NonZeroU64);

impl TotalSupply {
    /// Validate a configured supply.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveSupply`] for zero or negative values.
    pub fn new(supply: i64) -> Result<Self, DomainError> {
        u64::try_from(supply)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or(DomainError::NonPositiveSupply { supply })
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

/// A token's rarity score, rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct RarityScore(f64);

impl RarityScore {
    pub const ZERO: Self = Self(0.0);

    /// Wrap a raw score, rounding to two decimals with ties to even.
    #[must_use]
    pub fn from_raw(raw: f64) -> Self {
        Self((raw * 100.0).round_ties_even() / 100.0)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for RarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Score a token's traits against the collection's frequency table.
///
/// Total for every input: incomplete assertions and unknown traits are
/// skipped, and a token with no contributing trait scores exactly `0.0`.
#[must_use]
pub fn score(
    traits: &[TraitAssertion],
    cache: &TraitFrequencyCache,
    supply: TotalSupply,
) -> RarityScore {
    let supply = supply.get() as f64;
    let mut sum = 0.0;
    let mut contributing = 0u32;

    for assertion in traits.iter().filter(|t| t.is_complete()) {
        let occurrences = cache.occurrences(assertion.category(), assertion.value());
        if occurrences == 0 {
            continue;
        }
        let fraction = occurrences as f64 / supply;
        sum += 1.0 / fraction;
        contributing += 1;
    }

    if contributing == 0 {
        return RarityScore::ZERO;
    }
    RarityScore::from_raw(sum / f64::from(contributing))
}

/// Scorer bound to one run's frequency table and supply.
#[derive(Debug, Clone)]
pub struct RarityScorer {
    cache: TraitFrequencyCache,
    supply: TotalSupply,
}

impl RarityScorer {
    #[must_use]
    pub fn new(cache: TraitFrequencyCache, supply: TotalSupply) -> Self {
        Self { cache, supply }
    }

    #[must_use]
    pub fn score(&self, traits: &[TraitAssertion]) -> RarityScore {
        score(traits, &self.cache, self.supply)
    }

    #[must_use]
    pub fn cache(&self) -> &TraitFrequencyCache {
        &self.cache
    }

    #[must_use]
    pub fn supply(&self) -> TotalSupply {
        self.supply
    }
}
