//! Trait assertions and the collection-wide trait frequency table.
//!
//! The frequency table maps a trait category to its values and the number of
//! tokens in the collection carrying each value. Its JSON form is a plain
//! nested object, `{"Background": {"Blue": 100}}`, shared with whatever
//! process populates it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One `(category, value)` pair from a token's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraitAssertion {
    category: String,
    value: String,
}

impl TraitAssertion {
    pub fn new(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Both category and value are non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.category.is_empty() && !self.value.is_empty()
    }
}

/// Occurrence counts per trait category and value.
///
/// Loaded once per run and treated as read-only by the monitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitFrequencyCache {
    categories: BTreeMap<String, BTreeMap<String, u64>>,
}

impl TraitFrequencyCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` occurrences of `value` within `category`.
    pub fn insert(&mut self, category: impl Into<String>, value: impl Into<String>, count: u64) {
        self.categories
            .entry(category.into())
            .or_default()
            .insert(value.into(), count);
    }

    /// Occurrence count for a trait, zero when unknown.
    #[must_use]
    pub fn occurrences(&self, category: &str, value: &str) -> u64 {
        self.categories
            .get(category)
            .and_then(|values| values.get(value))
            .copied()
            .unwrap_or(0)
    }

    /// Number of trait categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of distinct `(category, value)` entries.
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate categories with their value counts, in category order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, u64>)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<C, V> FromIterator<(C, V, u64)> for TraitFrequencyCache
where
    C: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, V, u64)>>(iter: I) -> Self {
        let mut cache = Self::new();
        for (category, value, count) in iter {
            cache.insert(category, value, count);
        }
        cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_traits_have_zero_occurrences() {
        let cache: TraitFrequencyCache = [("Background", "Blue", 100)].into_iter().collect();

        assert_eq!(cache.occurrences("Background", "Blue"), 100);
        assert_eq!(cache.occurrences("Background", "Red"), 0);
        assert_eq!(cache.occurrences("Eyes", "Laser"), 0);
    }

    #[test]
    fn deserializes_nested_object_shape() {
        let json = r#"{"Background": {"Blue": 100, "Gold": 3}, "Eyes": {"Laser": 12}}"#;
        let cache: TraitFrequencyCache = serde_json::from_str(json).unwrap();

        assert_eq!(cache.category_count(), 2);
        assert_eq!(cache.value_count(), 3);
        assert_eq!(cache.occurrences("Background", "Gold"), 3);
    }

    #[test]
    fn incomplete_assertions_are_flagged() {
        assert!(TraitAssertion::new("Hat", "Cap").is_complete());
        assert!(!TraitAssertion::new("", "Cap").is_complete());
        assert!(!TraitAssertion::new("Hat", "").is_complete());
    }
}
