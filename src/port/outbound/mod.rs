//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the monitor's external dependencies: the
//! marketplace feed, the alert transport, and trait-cache storage.

pub mod feed;
pub mod notifier;
pub mod store;
