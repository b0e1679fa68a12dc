//! Infrastructure configuration modules.

pub mod collection;
pub mod logging;
pub mod monitor;
pub mod settings;
pub mod telegram;
