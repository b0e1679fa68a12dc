//! Operator-facing CLI output.
//!
//! Handlers describe what to show with the typed renderers ([`run_settings`],
//! [`run_summary`], [`trait_cache`], [`missing_inputs`]) or the small
//! primitives below them. Every line funnels through one [`Line`] value that
//! renders as indented text or, under `--json`, as one
//! `{"type": ..., "payload": ...}` object per line. `--quiet` keeps only
//! warnings and errors.

use std::fmt::Display;
use std::path::Path;
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use serde_json::{json, Value};

use crate::domain::traits::TraitFrequencyCache;
use crate::infrastructure::orchestration::{MonitorSettings, RunSummary};

const LABEL_WIDTH: usize = 14;

/// Output mode chosen by the global CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static MODE: OnceLock<OutputConfig> = OnceLock::new();

/// Fix the output mode for the process. Later calls are ignored.
pub fn configure(config: OutputConfig) {
    let _ = MODE.set(config);
}

fn mode() -> OutputConfig {
    MODE.get().copied().unwrap_or_default()
}

#[must_use]
pub fn is_json() -> bool {
    mode().json
}

#[must_use]
pub fn is_quiet() -> bool {
    mode().quiet
}

enum Line<'a> {
    Banner(&'a str),
    Section(&'a str),
    Field { label: &'a str, value: String },
    Success(&'a str),
    Warning(&'a str),
    Error(&'a str),
    Hint(&'a str),
}

impl Line<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Self::Banner(_) => "header",
            Self::Section(_) => "section",
            Self::Field { .. } => "field",
            Self::Success(_) => "success",
            Self::Warning(_) => "warning",
            Self::Error(_) => "error",
            Self::Hint(_) => "hint",
        }
    }

    fn payload(&self) -> Value {
        match self {
            Self::Banner(version) => json!({ "app": "rarescout", "version": version }),
            Self::Section(title) => json!({ "title": title }),
            Self::Field { label, value } => json!({ "label": label, "value": value }),
            Self::Success(message)
            | Self::Warning(message)
            | Self::Error(message)
            | Self::Hint(message) => json!({ "message": message }),
        }
    }

    fn text(&self) -> String {
        match self {
            Self::Banner(version) => format!("{} {}\n", "rarescout".bold(), version.dimmed()),
            Self::Section(title) => format!("\n{}", title.bold()),
            Self::Field { label, value } => {
                format!("  {} {value}", format!("{label:<LABEL_WIDTH$}").dimmed())
            }
            Self::Success(message) => format!("  {} {message}", "✓".green()),
            Self::Warning(message) => format!("  {} {message}", "⚠".yellow()),
            Self::Error(message) => format!("  {} {message}", "×".red()),
            Self::Hint(message) => format!("  {}: {}", "hint".cyan(), message.dimmed()),
        }
    }

    fn survives_quiet(&self) -> bool {
        matches!(self, Self::Warning(_) | Self::Error(_))
    }

    fn to_stderr(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

fn emit(line: Line<'_>) {
    let mode = mode();
    let rendered = if mode.json {
        json!({ "type": line.kind(), "payload": line.payload() }).to_string()
    } else if mode.quiet && !line.survives_quiet() {
        return;
    } else {
        line.text()
    };

    if line.to_stderr() {
        eprintln!("{rendered}");
    } else {
        println!("{rendered}");
    }
}

pub fn banner(version: &str) {
    emit(Line::Banner(version));
}

pub fn section(title: &str) {
    emit(Line::Section(title));
}

pub fn field(label: &str, value: impl Display) {
    emit(Line::Field {
        label,
        value: value.to_string(),
    });
}

pub fn success(message: &str) {
    emit(Line::Success(message));
}

pub fn warning(message: &str) {
    emit(Line::Warning(message));
}

pub fn error(message: &str) {
    emit(Line::Error(message));
}

pub fn hint(message: &str) {
    emit(Line::Hint(message));
}

/// The resolved inputs of a monitoring run.
pub fn run_settings(settings: &MonitorSettings) {
    field("Collection", &settings.collection_slug);
    field("Contract", &settings.contract_address);
    field("Threshold", settings.threshold.threshold);
    field("Source", settings.threshold.source);
    field("Supply", settings.total_supply.get());
    field(
        "Poll",
        format!(
            "every {} ms, {} ms after errors",
            settings.poll_interval.as_millis(),
            settings.error_backoff.as_millis()
        ),
    );
    field(
        "Ledger cap",
        settings
            .max_seen_listings
            .map_or_else(|| "unbounded".to_string(), |cap| cap.to_string()),
    );
}

/// Counters of a finished run.
pub fn run_summary(summary: &RunSummary) {
    section("Run summary");
    field(
        "Polls",
        format!("{} ({} failed)", summary.polls, summary.failed_polls),
    );
    field("Events", summary.events_received);
    field("Listings", summary.listings_processed);
    field("Duplicates", summary.duplicates_skipped);
    field("Skipped", summary.events_skipped);
    field("No metadata", summary.metadata_misses);
    field(
        "Alerts",
        format!("{} ({} failed)", summary.alerts_sent, summary.alert_failures),
    );
    success("Monitor stopped");
}

/// Per-category summary of a trait frequency table.
pub fn trait_cache(path: &Path, cache: &TraitFrequencyCache) {
    field("Path", path.display());

    if cache.is_empty() {
        warning("Trait cache is empty or unreadable; every listing will score 0.00");
        hint("populate the cache file before running the monitor");
        return;
    }

    field("Categories", cache.category_count());
    field("Values", cache.value_count());
    section("Categories");
    for (category, values) in cache.categories() {
        let tokens: u64 = values.values().sum();
        field(category, format!("{} values, {tokens} tokens", values.len()));
    }
    success("Trait cache loaded");
}

/// Required inputs that are not configured.
pub fn missing_inputs(fields: &[&str]) {
    for name in fields {
        field("Missing", name);
    }
    hint("set them in the environment or a .env file");
}
