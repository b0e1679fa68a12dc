//! OpenSea REST API client.
//!
//! Two endpoints are used:
//! - `GET /events`: recent collection events, polled by the monitor
//! - `GET /asset/{contract}/{token_id}`: per-token metadata with traits
//!
//! The event poll uses a short timeout so a stalled request cannot hold the
//! loop; metadata requests get a longer one.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client as HttpClient, StatusCode};
use tracing::{debug, warn};

use super::dto::{EventsResponse, MetadataResponse};
use super::settings::OpenSeaConfig;
use crate::domain::listing::FeedEvent;
use crate::error::FeedError;
use crate::port::{FeedQuery, ListingFeed, TokenMetadata};

const API_KEY_HEADER: &str = "x-api-key";
const MAX_ERROR_BODY: usize = 200;

/// HTTP client for the OpenSea v2 REST API.
pub struct OpenSeaClient {
    /// Client for the event poll.
    events_http: HttpClient,
    /// Client for metadata requests.
    metadata_http: HttpClient,
    api_url: String,
}

impl OpenSeaClient {
    #[must_use]
    pub fn from_config(config: &OpenSeaConfig) -> Self {
        let headers = default_headers(config.api_key.as_deref());
        Self {
            events_http: build_http(
                &headers,
                &config.user_agent,
                Duration::from_millis(config.timeout_ms),
            ),
            metadata_http: build_http(
                &headers,
                &config.user_agent,
                Duration::from_millis(config.metadata_timeout_ms),
            ),
            api_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    fn metadata_url(&self, contract_address: &str, token_id: &str) -> String {
        format!("{}/asset/{contract_address}/{token_id}", self.api_url)
    }
}

fn default_headers(api_key: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(key) = api_key {
        match HeaderValue::from_str(key) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(API_KEY_HEADER, value);
            }
            Err(err) => warn!(error = %err, "OpenSea API key is not a valid header value"),
        }
    }
    headers
}

fn build_http(headers: &HeaderMap, user_agent: &str, timeout: Duration) -> HttpClient {
    HttpClient::builder()
        .default_headers(headers.clone())
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
        .unwrap_or_else(|err| {
            warn!(error = %err, "Failed to build HTTP client, using defaults");
            HttpClient::new()
        })
}

fn truncate(body: String) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body;
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[async_trait]
impl ListingFeed for OpenSeaClient {
    async fn fetch_events(&self, query: &FeedQuery) -> Result<Vec<FeedEvent>, FeedError> {
        let url = format!("{}/events", self.api_url);
        let limit = query.limit.to_string();

        let response = self
            .events_http
            .get(&url)
            .query(&[
                ("event_type", query.event_type.as_str()),
                ("collection_slug", query.collection.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "OpenSea events response");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                status: status.as_u16(),
                body: truncate(body),
            });
        }

        let envelope: EventsResponse = response.json().await?;
        Ok(envelope.into_feed_events())
    }

    async fn fetch_metadata(
        &self,
        token_id: &str,
        contract_address: &str,
    ) -> Option<TokenMetadata> {
        let url = self.metadata_url(contract_address, token_id);

        let response = match self.metadata_http.get(&url).send().await {
            Ok(response) => response,
            Err(err) if err.is_timeout() => {
                warn!(token_id, "Timed out fetching metadata");
                return None;
            }
            Err(err) => {
                warn!(token_id, error = %err, "Network error fetching metadata");
                return None;
            }
        };

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                warn!(token_id, "Token not found on OpenSea");
                return None;
            }
            StatusCode::TOO_MANY_REQUESTS => {
                warn!(token_id, "Rate limited by OpenSea fetching metadata");
                return None;
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                warn!(
                    token_id,
                    status = status.as_u16(),
                    body = %truncate(body),
                    "Metadata fetch failed"
                );
                return None;
            }
        }

        match response.json::<MetadataResponse>().await {
            Ok(metadata) => {
                debug!(token_id, "Metadata fetched");
                Some(metadata.into())
            }
            Err(err) => {
                warn!(token_id, error = %err, "Invalid metadata response");
                None
            }
        }
    }

    fn feed_name(&self) -> &'static str {
        "OpenSea"
    }
}
