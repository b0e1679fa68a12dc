//! Cooperative shutdown signal.
//!
//! [`ShutdownController`] owns a `watch` channel holding a single `bool`.
//! Any number of [`Shutdown`] handles observe it: they can check the flag
//! without blocking, await it, or sleep in a way that ends early once it is
//! set.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

/// Sets the shutdown signal. Cheap to clone and safe to trigger from any task.
#[derive(Debug, Clone)]
pub struct ShutdownController {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownController {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Request shutdown. Returns `true` only for the call that set the flag.
    pub fn trigger(&self) -> bool {
        self.tx.send_if_modified(|stopped| {
            if *stopped {
                false
            } else {
                *stopped = true;
                true
            }
        })
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// A new observer of this signal.
    #[must_use]
    pub fn subscribe(&self) -> Shutdown {
        Shutdown {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for ShutdownController {
    fn default() -> Self {
        Self::new()
    }
}

/// How an interruptible sleep ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepOutcome {
    Elapsed,
    Stopped,
}

/// Read side of the shutdown signal.
#[derive(Debug, Clone)]
pub struct Shutdown {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once shutdown is requested.
    ///
    /// Never resolves if the controller is dropped without triggering.
    pub async fn stopped(&self) {
        let mut rx = self.rx.clone();
        let signalled = rx.wait_for(|stopped| *stopped).await.map(|_| ());
        if signalled.is_err() {
            std::future::pending::<()>().await;
        }
    }

    /// Sleep for `duration` unless shutdown is requested first.
    pub async fn sleep(&self, duration: Duration) -> SleepOutcome {
        if self.is_stopped() {
            return SleepOutcome::Stopped;
        }
        tokio::select! {
            biased;
            () = self.stopped() => SleepOutcome::Stopped,
            () = tokio::time::sleep(duration) => SleepOutcome::Elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn trigger_is_idempotent() {
        let controller = ShutdownController::new();
        let shutdown = controller.subscribe();

        assert!(!shutdown.is_stopped());
        assert!(controller.trigger());
        assert!(!controller.trigger());
        assert!(controller.is_triggered());
        assert!(shutdown.is_stopped());
    }

    #[test]
    fn late_subscribers_see_the_flag() {
        let controller = ShutdownController::new();
        controller.trigger();
        assert!(controller.subscribe().is_stopped());
    }

    #[tokio::test]
    async fn sleep_elapses_without_signal() {
        let controller = ShutdownController::new();
        let outcome = controller
            .subscribe()
            .sleep(Duration::from_millis(10))
            .await;
        assert_eq!(outcome, SleepOutcome::Elapsed);
    }

    #[tokio::test]
    async fn sleep_returns_early_when_triggered() {
        let controller = ShutdownController::new();
        let shutdown = controller.subscribe();

        let trigger = controller.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.trigger();
        });

        let started = Instant::now();
        let outcome = shutdown.sleep(Duration::from_secs(30)).await;

        assert_eq!(outcome, SleepOutcome::Stopped);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn sleep_after_trigger_returns_immediately() {
        let controller = ShutdownController::new();
        controller.trigger();
        let outcome = controller
            .subscribe()
            .sleep(Duration::from_secs(30))
            .await;
        assert_eq!(outcome, SleepOutcome::Stopped);
    }
}
