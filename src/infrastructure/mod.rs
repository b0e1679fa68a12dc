//! Infrastructure layer.
//!
//! Provides technical concerns that support the monitor without containing
//! business logic: configuration, adapter wiring, and the runtime loop.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation
//! - [`orchestration`] - Monitoring loop and shutdown signal

pub mod bootstrap;
pub mod config;
pub mod orchestration;
