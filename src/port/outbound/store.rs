//! Trait frequency cache persistence port.

use crate::domain::traits::TraitFrequencyCache;
use crate::error::Result;

/// Storage for the collection's trait frequency table.
pub trait TraitStore: Send + Sync {
    /// Load the table. Unavailable or unreadable storage yields an empty table.
    fn load(&self) -> TraitFrequencyCache;

    /// Persist the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be serialized or written.
    fn save(&self, cache: &TraitFrequencyCache) -> Result<()>;
}
