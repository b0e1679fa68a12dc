//! In-run record of listings already processed.
//!
//! The ledger is unbounded by default: it lives for one run and runs are
//! restarted by the operator. An optional cap evicts the oldest identity
//! first once the limit is reached.

use std::collections::{HashSet, VecDeque};
use std::num::NonZeroUsize;

use super::listing::ListingIdentity;

#[derive(Debug, Default)]
pub struct ListingLedger {
    seen: HashSet<ListingIdentity>,
    /// Insertion order, tracked only when capped.
    order: VecDeque<ListingIdentity>,
    max_entries: Option<NonZeroUsize>,
    evicted: u64,
}

impl ListingLedger {
    /// Create an unbounded ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger that holds at most `max_entries` identities.
    #[must_use]
    pub fn with_max_entries(max_entries: NonZeroUsize) -> Self {
        Self {
            max_entries: Some(max_entries),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn seen(&self, identity: &ListingIdentity) -> bool {
        self.seen.contains(identity)
    }

    pub fn mark_seen(&mut self, identity: ListingIdentity) {
        let Some(limit) = self.max_entries else {
            self.seen.insert(identity);
            return;
        };
        if !self.seen.insert(identity.clone()) {
            return;
        }
        self.order.push_back(identity);
        while self.seen.len() > limit.get() {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.seen.remove(&oldest);
            self.evicted += 1;
        }
    }

    /// Mark `identity` seen, returning `false` if it already was.
    pub fn admit(&mut self, identity: ListingIdentity) -> bool {
        if self.seen(&identity) {
            return false;
        }
        self.mark_seen(identity);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    #[must_use]
    pub fn max_entries(&self) -> Option<NonZeroUsize> {
        self.max_entries
    }

    /// Identities dropped by the cap so far.
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }
}
