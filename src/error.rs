use thiserror::Error;

pub use crate::domain::error::DomainError;
use crate::domain::listing::Rejection;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required configuration: {}", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures while polling the listing feed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("listing feed returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("listing feed request timed out")]
    Timeout,

    #[error("listing feed request cancelled")]
    Cancelled,

    #[error("listing feed transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Failures delivering a message over the alert transport.
#[derive(Error, Debug, Clone)]
pub enum NotifyError {
    #[error("alert transport rejected message: {0}")]
    Rejected(String),

    #[error("alert transport unavailable: {0}")]
    Unavailable(String),
}

/// Failures scoped to a single listing. Never escalated past that listing.
#[derive(Error, Debug, Clone)]
pub enum ItemError {
    #[error("feed event skipped: {0}")]
    Skipped(#[from] Rejection),

    #[error("no metadata available for token {token_id}")]
    MissingMetadata { token_id: String },

    #[error("token {token_id} has no traits")]
    NoTraits { token_id: String },

    #[error("alert dispatch failed: {0}")]
    Dispatch(#[from] NotifyError),
}

/// How the monitoring loop must react to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// End the run and exit non-zero.
    Fatal,
    /// Back off, then poll again.
    RetryableNetwork,
    /// Skip the current listing only.
    PerItem,
    /// Not a failure: stop cleanly.
    Cancelled,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error(transparent)]
    Item(#[from] ItemError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("monitor cycle panicked: {0}")]
    Panicked(String),
}

impl Error {
    /// Classify this error for the monitoring loop.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::Config(_) | Self::Domain(_) => Severity::Fatal,
            Self::Feed(FeedError::Cancelled) => Severity::Cancelled,
            Self::Feed(_) | Self::Panicked(_) => Severity::RetryableNetwork,
            Self::Notify(_) | Self::Item(_) | Self::Json(_) | Self::Io(_) => Severity::PerItem,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_lists_every_field() {
        let err = ConfigError::MissingFields {
            fields: vec!["COLLECTION_SLUG", "TELEGRAM_BOT_TOKEN"],
        };
        assert_eq!(
            err.to_string(),
            "missing required configuration: COLLECTION_SLUG, TELEGRAM_BOT_TOKEN"
        );
    }

    #[test]
    fn feed_errors_are_retryable_except_cancellation() {
        let status: Error = FeedError::Status {
            status: 503,
            body: "busy".into(),
        }
        .into();
        assert_eq!(status.severity(), Severity::RetryableNetwork);
        assert_eq!(
            Error::from(FeedError::Timeout).severity(),
            Severity::RetryableNetwork
        );
        assert_eq!(
            Error::from(FeedError::Transport("reset".into())).severity(),
            Severity::RetryableNetwork
        );
        assert_eq!(
            Error::from(FeedError::Cancelled).severity(),
            Severity::Cancelled
        );
    }

    #[test]
    fn config_errors_are_fatal() {
        let err: Error = ConfigError::MissingField {
            field: "CONTRACT_ADDRESS",
        }
        .into();
        assert_eq!(err.severity(), Severity::Fatal);
    }

    #[test]
    fn item_errors_stay_per_item() {
        let err: Error = ItemError::MissingMetadata {
            token_id: "7".into(),
        }
        .into();
        assert_eq!(err.severity(), Severity::PerItem);

        let err: Error = ItemError::from(NotifyError::Rejected("chat not found".into())).into();
        assert_eq!(err.severity(), Severity::PerItem);
    }
}
