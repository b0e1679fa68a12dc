//! Recording [`Notifier`] for asserting on dispatched messages.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::NotifyError;
use crate::port::Notifier;

/// Records every delivered message. Can be told to fail the first `n` sends.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
    attempts: Arc<AtomicU32>,
    fail_first: u32,
    fail_all: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the first `n` sends, then deliver normally.
    pub fn failing_first(n: u32) -> Self {
        Self {
            fail_first: n,
            ..Self::default()
        }
    }

    /// Fail every send.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Successfully delivered messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Delivered messages that are listing alerts.
    pub fn alerts(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|m| m.contains("HIGH SCORE LISTING"))
            .collect()
    }

    /// All send attempts, including failures.
    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_all || attempt < self.fail_first {
            return Err(NotifyError::Rejected("scripted failure".into()));
        }
        self.messages.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
