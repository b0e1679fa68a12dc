//! Notifier that writes alerts to the tracing log.

use async_trait::async_trait;
use tracing::info;

use crate::error::NotifyError;
use crate::port::Notifier;

/// Logs each message at `info` level. Used when no transport is compiled in.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        info!(message = %text, "Alert");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
