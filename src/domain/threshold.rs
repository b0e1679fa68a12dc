//! Score thresholds and per-collection defaults.
//!
//! A run's threshold comes from an explicit override when one is configured.
//! Otherwise the collection slug is matched against [`COLLECTION_THRESHOLDS`]:
//! exact key first, then the first key contained in the lowercased slug
//! (so `milady-maker` resolves through `milady`), then [`DEFAULT_THRESHOLD`].

use std::fmt;

use super::error::DomainError;

/// Per-collection defaults, in match priority order.
pub const COLLECTION_THRESHOLDS: &[(&str, f64)] = &[
    // PFP
    ("milady", 150.0),
    ("azuki", 120.0),
    ("doodles", 80.0),
    ("bayc", 200.0),
    ("cryptopunks", 300.0),
    ("cool-cats", 100.0),
    ("moonbirds", 180.0),
    ("veefriends", 90.0),
    // Generative art
    ("art-blocks", 200.0),
    ("chromie-squig", 150.0),
    ("fidenza", 250.0),
    // Gaming and metaverse
    ("axie", 50.0),
    ("sandbox", 60.0),
    ("decentraland", 70.0),
    // 1/1 art
    ("beeple", 500.0),
    ("pak", 400.0),
    ("xcopy", 450.0),
    // Music
    ("audius", 100.0),
    ("catalog", 120.0),
    // Names
    ("ens", 30.0),
    ("unstoppable", 40.0),
    // Community
    ("pepe", 80.0),
    ("wojak", 70.0),
];

pub const DEFAULT_THRESHOLD: f64 = 100.0;

/// Minimum score that triggers an alert.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScoreThreshold(f64);

impl ScoreThreshold {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidThreshold`] for negative or non-finite values.
    pub fn new(threshold: f64) -> Result<Self, DomainError> {
        if threshold.is_finite() && threshold >= 0.0 {
            Ok(Self(threshold))
        } else {
            Err(DomainError::InvalidThreshold { threshold })
        }
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for ScoreThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a resolved threshold came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdSource {
    Override,
    Exact(&'static str),
    Partial(&'static str),
    Default,
}

impl fmt::Display for ThresholdSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override => write!(f, "explicit override"),
            Self::Exact(key) => write!(f, "collection table ({key})"),
            Self::Partial(key) => write!(f, "collection table, partial match ({key})"),
            Self::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedThreshold {
    pub threshold: ScoreThreshold,
    pub source: ThresholdSource,
}

/// Resolve the threshold for a collection.
///
/// # Errors
///
/// Returns [`DomainError::InvalidThreshold`] if the override is invalid.
pub fn resolve_threshold(
    slug: Option<&str>,
    explicit: Option<f64>,
) -> Result<ResolvedThreshold, DomainError> {
    if let Some(value) = explicit {
        return Ok(ResolvedThreshold {
            threshold: ScoreThreshold::new(value)?,
            source: ThresholdSource::Override,
        });
    }
    Ok(table_threshold(slug.unwrap_or_default()))
}

fn table_threshold(slug: &str) -> ResolvedThreshold {
    let resolved = |value: f64, source| ResolvedThreshold {
        threshold: ScoreThreshold(value),
        source,
    };

    if slug.is_empty() {
        return resolved(DEFAULT_THRESHOLD, ThresholdSource::Default);
    }
    if let Some(&(key, value)) = COLLECTION_THRESHOLDS.iter().find(|(key, _)| *key == slug) {
        return resolved(value, ThresholdSource::Exact(key));
    }
    let lowered = slug.to_lowercase();
    if let Some(&(key, value)) = COLLECTION_THRESHOLDS
        .iter()
        .find(|(key, _)| lowered.contains(key))
    {
        return resolved(value, ThresholdSource::Partial(key));
    }
    resolved(DEFAULT_THRESHOLD, ThresholdSource::Default)
}
