//! Notifier port for operator alerts.

use async_trait::async_trait;

use crate::error::NotifyError;

/// Delivers text messages to an operator.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - The caller only inspects success or failure, never a response body
/// - Failures are logged by the caller and never retried
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a message.
    async fn send(&self, text: &str) -> Result<(), NotifyError>;

    /// Transport name for logging.
    fn name(&self) -> &'static str;
}
