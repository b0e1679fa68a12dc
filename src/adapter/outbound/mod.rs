//! Outbound adapters (driven side).

pub mod notifier;
pub mod opensea;
pub mod store;
