//! Run lifecycle: load, validate, wire, monitor.

use std::sync::Arc;

use tracing::{info, warn};

use super::monitor::{Monitor, MonitorSettings};
use super::shutdown::{Shutdown, ShutdownController};
use super::summary::RunSummary;
use crate::domain::traits::TraitFrequencyCache;
use crate::error::Result;
use crate::infrastructure::bootstrap::{build_feed, build_notifier, build_trait_store};
use crate::infrastructure::config::settings::Config;
use crate::port::{ListingFeed, Notifier};

/// Run until Ctrl-C (or SIGTERM on unix).
///
/// # Errors
///
/// Returns an error if required configuration is missing or invalid.
pub async fn run(config: &Config) -> Result<RunSummary> {
    let controller = ShutdownController::new();
    let signals = tokio::spawn(trigger_on_signal(controller.clone()));

    let result = run_with_shutdown(config, controller.subscribe()).await;
    signals.abort();
    result
}

/// Run with an externally controlled shutdown signal.
///
/// # Errors
///
/// Returns an error if required configuration is missing or invalid.
pub async fn run_with_shutdown(config: &Config, shutdown: Shutdown) -> Result<RunSummary> {
    let store = build_trait_store(config);
    let cache = store.load();
    let settings = config.monitor_settings()?;

    let feed = build_feed(config);
    let notifier = build_notifier(config);
    Ok(run_monitor(settings, cache, feed, notifier, shutdown).await)
}

/// Run a monitor over already-built collaborators.
pub async fn run_monitor(
    settings: MonitorSettings,
    cache: TraitFrequencyCache,
    feed: Arc<dyn ListingFeed>,
    notifier: Arc<dyn Notifier>,
    shutdown: Shutdown,
) -> RunSummary {
    Monitor::new(settings, cache, feed, notifier, shutdown)
        .run()
        .await
}

async fn trigger_on_signal(controller: ShutdownController) {
    wait_for_signal().await;
    info!("Shutdown signal received");
    controller.trigger();
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(e) => {
            warn!(error = %e, "Failed to install SIGTERM handler");
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
            return;
        }
    };

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                warn!(error = %e, "Failed to listen for Ctrl-C");
                terminate.recv().await;
            }
        }
        _ = terminate.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
