//! Diagnostic check command handlers.

pub mod cache;
pub mod config;
pub mod telegram;
