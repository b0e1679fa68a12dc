//! Mock [`ListingFeed`] for driving the monitor loop.
//!
//! Each call to `fetch_events()` pops the next scripted [`FeedStep`]. Once
//! the script is exhausted the feed returns empty pages, optionally
//! triggering a [`ShutdownController`] first so a test run ends on its own.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::listing::FeedEvent;
use crate::error::FeedError;
use crate::infrastructure::orchestration::ShutdownController;
use crate::port::{FeedQuery, ListingFeed, TokenMetadata};

/// One scripted response to `fetch_events()`.
#[derive(Debug)]
pub enum FeedStep {
    Events(Vec<FeedEvent>),
    Fail(FeedError),
    Panic(&'static str),
    /// Never completes; the caller must cancel.
    Hang,
}

pub struct ScriptedFeed {
    steps: Mutex<VecDeque<FeedStep>>,
    metadata: HashMap<String, TokenMetadata>,
    hang_metadata: bool,
    stop_when_drained: Option<ShutdownController>,
    poll_count: AtomicU32,
    metadata_count: AtomicU32,
    queries: Mutex<Vec<FeedQuery>>,
}

impl ScriptedFeed {
    pub fn new() -> Self {
        Self {
            steps: Mutex::new(VecDeque::new()),
            metadata: HashMap::new(),
            hang_metadata: false,
            stop_when_drained: None,
            poll_count: AtomicU32::new(0),
            metadata_count: AtomicU32::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_steps(self, steps: Vec<FeedStep>) -> Self {
        *self.steps.lock().unwrap() = steps.into();
        self
    }

    pub fn with_metadata(mut self, token_id: &str, metadata: TokenMetadata) -> Self {
        self.metadata.insert(token_id.to_string(), metadata);
        self
    }

    /// Make every metadata request hang until cancelled.
    pub fn with_hanging_metadata(mut self) -> Self {
        self.hang_metadata = true;
        self
    }

    /// Trigger `controller` when the script runs out.
    pub fn stop_when_drained(mut self, controller: ShutdownController) -> Self {
        self.stop_when_drained = Some(controller);
        self
    }

    pub fn poll_count(&self) -> u32 {
        self.poll_count.load(Ordering::SeqCst)
    }

    pub fn metadata_count(&self) -> u32 {
        self.metadata_count.load(Ordering::SeqCst)
    }

    /// Every query received, in order.
    pub fn queries(&self) -> Vec<FeedQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl Default for ScriptedFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingFeed for ScriptedFeed {
    async fn fetch_events(&self, query: &FeedQuery) -> Result<Vec<FeedEvent>, FeedError> {
        self.poll_count.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());

        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(FeedStep::Events(events)) => Ok(events),
            Some(FeedStep::Fail(err)) => Err(err),
            Some(FeedStep::Panic(message)) => panic!("{message}"),
            Some(FeedStep::Hang) => std::future::pending().await,
            None => {
                if let Some(controller) = &self.stop_when_drained {
                    controller.trigger();
                }
                Ok(Vec::new())
            }
        }
    }

    async fn fetch_metadata(
        &self,
        token_id: &str,
        _contract_address: &str,
    ) -> Option<TokenMetadata> {
        self.metadata_count.fetch_add(1, Ordering::SeqCst);
        if self.hang_metadata {
            std::future::pending::<()>().await;
        }
        self.metadata.get(token_id).cloned()
    }

    fn feed_name(&self) -> &'static str {
        "scripted"
    }
}
