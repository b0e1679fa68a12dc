//! Application orchestration.
//!
//! The monitoring loop, its cancellation signal, and the runtime wiring that
//! assembles them from configuration.

pub mod monitor;
pub mod runtime;
pub mod shutdown;
mod startup;
pub mod summary;

pub use monitor::{Monitor, MonitorSettings};
pub use runtime::{run, run_monitor, run_with_shutdown};
pub use shutdown::{Shutdown, ShutdownController, SleepOutcome};
pub use summary::RunSummary;
