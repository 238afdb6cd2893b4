//! Low-level HTTP client: `LotkeeperHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the domain sub-clients).

use crate::domain::auction::wire::AuctionResponse;
use crate::domain::auction::AuctionFilter;
use crate::domain::datapoint::wire::{
    ItemActivityHourlySummaryResponse, PriceHourlySummaryResponse,
    RealmActivityHourlySummaryResponse,
};
use crate::domain::datapoint::TimeRange;
use crate::domain::item::wire::ItemResponse;
use crate::domain::item::ItemFilter;
use crate::domain::server_realm::wire::ServerRealmResponse;
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;
use crate::network::API_PREFIX;
use crate::shared::pagination::{PageRequest, PageWire};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Low-level HTTP client for the Lotkeeper REST API.
#[derive(Debug, Clone)]
pub struct LotkeeperHttp {
    host: String,
    client: Client,
    retry: RetryPolicy,
}

impl LotkeeperHttp {
    /// Client with default transport settings and no retries.
    pub fn new(host: &str) -> Result<Self, HttpError> {
        let mut builder = Client::builder().default_headers(json_headers());
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }
        Ok(Self::with_client(host, builder.build()?, RetryPolicy::None))
    }

    pub(crate) fn with_client(host: &str, client: Client, retry: RetryPolicy) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            client,
            retry,
        }
    }

    /// Host without trailing slash.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// `{host}/api/v1`.
    pub fn api_url(&self) -> String {
        format!("{}{}", self.host, API_PREFIX)
    }

    // ── Health ───────────────────────────────────────────────────────────

    pub async fn get_health(&self) -> Result<HealthResponse, HttpError> {
        let url = format!("{}/health", self.host);
        self.get(&url, "Failed to get health").await
    }

    // ── Server realms ────────────────────────────────────────────────────

    pub async fn get_server_realms(&self) -> Result<Vec<ServerRealmResponse>, HttpError> {
        let url = self.endpoint(&["server-realms"], &[])?;
        self.get(&url, "Failed to get server realms").await
    }

    pub async fn get_server_realm(
        &self,
        server_slug: &str,
        realm_slug: &str,
    ) -> Result<ServerRealmResponse, HttpError> {
        let url = self.endpoint(&["server-realms", server_slug, realm_slug], &[])?;
        self.get(&url, "Failed to get server realm").await
    }

    // ── Items ────────────────────────────────────────────────────────────

    pub async fn get_items_filtered(
        &self,
        server: &str,
        realm: &str,
        filter: &ItemFilter,
        page: PageRequest,
    ) -> Result<PageWire<ItemResponse>, HttpError> {
        let mut query = page.query_pairs();
        query.extend(filter.query_pairs());
        let url = self.endpoint(&["items", server, realm], &query)?;
        self.get(&url, "Failed to get filtered items").await
    }

    pub async fn get_items_bulk(
        &self,
        server: &str,
        realm: &str,
    ) -> Result<Vec<ItemResponse>, HttpError> {
        let url = self.endpoint(&["items", server, realm, "bulk"], &[])?;
        self.get(&url, "Failed to get bulk items").await
    }

    pub async fn get_items_count(&self, server: &str, realm: &str) -> Result<u64, HttpError> {
        let url = self.endpoint(&["items", server, realm, "count"], &[])?;
        self.get(&url, "Failed to get items count").await
    }

    // ── Auctions ─────────────────────────────────────────────────────────

    pub async fn get_auctions_filtered(
        &self,
        server: &str,
        realm: &str,
        filter: &AuctionFilter,
        page: PageRequest,
    ) -> Result<PageWire<AuctionResponse>, HttpError> {
        let mut query = page.query_pairs();
        query.extend(filter.query_pairs());
        let url = self.endpoint(&["auctions", server, realm], &query)?;
        self.get(&url, "Failed to get filtered auctions").await
    }

    pub async fn get_auctions_bulk(
        &self,
        server: &str,
        realm: &str,
    ) -> Result<Vec<AuctionResponse>, HttpError> {
        let url = self.endpoint(&["auctions", server, realm, "bulk"], &[])?;
        self.get(&url, "Failed to get bulk auctions").await
    }

    pub async fn get_auctions_count(&self, server: &str, realm: &str) -> Result<u64, HttpError> {
        let url = self.endpoint(&["auctions", server, realm, "count"], &[])?;
        self.get(&url, "Failed to get auctions count").await
    }

    pub async fn get_auctions_value(&self, server: &str, realm: &str) -> Result<u64, HttpError> {
        let url = self.endpoint(&["auctions", server, realm, "value"], &[])?;
        self.get(&url, "Failed to get auctions value").await
    }

    // ── Auction datapoints ───────────────────────────────────────────────

    pub async fn get_price_hourly_summary(
        &self,
        server: &str,
        realm: &str,
        item_id: u64,
        range: TimeRange,
    ) -> Result<Vec<PriceHourlySummaryResponse>, HttpError> {
        let item_id = item_id.to_string();
        let url = self.endpoint(
            &["auctions", "datapoints", server, realm, &item_id, "price-hourly-summary"],
            &range.query_pairs(),
        )?;
        self.get(&url, "Failed to get price hourly summary").await
    }

    pub async fn get_item_activity_hourly_summary(
        &self,
        server: &str,
        realm: &str,
        item_id: u64,
        range: TimeRange,
    ) -> Result<Vec<ItemActivityHourlySummaryResponse>, HttpError> {
        let item_id = item_id.to_string();
        let url = self.endpoint(
            &["auctions", "datapoints", server, realm, &item_id, "activity-hourly-summary"],
            &range.query_pairs(),
        )?;
        self.get(&url, "Failed to get item activity hourly summary").await
    }

    pub async fn get_realm_activity_hourly_summary(
        &self,
        server: &str,
        realm: &str,
        range: TimeRange,
    ) -> Result<Vec<RealmActivityHourlySummaryResponse>, HttpError> {
        let url = self.endpoint(
            &["auctions", "datapoints", server, realm, "activity-hourly-summary"],
            &range.query_pairs(),
        )?;
        self.get(&url, "Failed to get realm activity hourly summary").await
    }

    // ── URL building ─────────────────────────────────────────────────────

    /// `{host}/api/v1/{segments...}?{query}` with every segment percent-encoded.
    ///
    /// The query is form-encoded in the given order; an empty query adds no `?`.
    pub(crate) fn endpoint(
        &self,
        segments: &[&str],
        query: &[(&'static str, String)],
    ) -> Result<String, HttpError> {
        let mut url = self.api_url();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        if !query.is_empty() {
            let encoded =
                serde_urlencoded::to_string(query).map_err(|e| HttpError::Encode(e.to_string()))?;
            url.push('?');
            url.push_str(&encoded);
        }
        Ok(url)
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        context: &'static str,
    ) -> Result<T, HttpError> {
        let config = match self.retry.config() {
            None => return self.do_request(url, context).await,
            Some(c) => c,
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T>(url, context).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = config.is_retryable(&e);
                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else if should_retry {
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned>(
        &self,
        url: &str,
        context: &'static str,
    ) -> Result<T, HttpError> {
        tracing::debug!(method = "GET", url, "Sending request");

        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let body = resp.bytes().await?;
            return serde_json::from_slice(&body)
                .map_err(|e| HttpError::Decode(format!("{}: {}", context, e)));
        }

        let reason = reason_phrase(&resp);
        tracing::warn!(status = status.as_u16(), reason = %reason, url, "{}", context);

        Err(HttpError::RequestFailed {
            context,
            status: status.as_u16(),
            reason,
        })
    }
}

/// Headers sent with every request.
pub(crate) fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// The reason phrase the response carried, else the canonical one.
///
/// hyper only records the phrase when it differs from the canonical reason.
fn reason_phrase(resp: &Response) -> String {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Some(phrase) = resp.extensions().get::<hyper::ext::ReasonPhrase>() {
            return String::from_utf8_lossy(phrase.as_bytes()).into_owned();
        }
    }
    resp.status()
        .canonical_reason()
        .unwrap_or("Unknown Status")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http() -> LotkeeperHttp {
        LotkeeperHttp::new("https://lot.example/").unwrap()
    }

    #[test]
    fn test_json_headers() {
        let headers = json_headers();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], "application/json");
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let h = http();
        assert_eq!(h.host(), "https://lot.example");
        assert_eq!(h.api_url(), "https://lot.example/api/v1");
    }

    #[test]
    fn test_endpoint_without_query_has_no_question_mark() {
        let url = http().endpoint(&["items", "turtle-wow", "nordanaar", "bulk"], &[]).unwrap();
        assert_eq!(url, "https://lot.example/api/v1/items/turtle-wow/nordanaar/bulk");
    }

    #[test]
    fn test_endpoint_encodes_segments_and_query() {
        let query = vec![
            ("limit", "50".to_string()),
            ("offset", "0".to_string()),
            ("name", "Bob's Axe & Co".to_string()),
        ];
        let url = http().endpoint(&["items", "project epoch", "gurubashi"], &query).unwrap();
        assert_eq!(
            url,
            "https://lot.example/api/v1/items/project%20epoch/gurubashi?limit=50&offset=0&name=Bob%27s+Axe+%26+Co"
        );
    }
}
