//! High-level client: `LotkeeperClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::auction::client::Auctions;
use crate::domain::datapoint::client::Datapoints;
use crate::domain::item::client::Items;
use crate::domain::server_realm::client::ServerRealms;
use crate::error::{HttpError, SdkError};
use crate::http::client::json_headers;
use crate::http::{LotkeeperHttp, RetryPolicy};
use crate::network::{DEFAULT_HOST, HOST_ENV_VAR, PUBLIC_HOST_ENV_VAR};

use reqwest::header::{HeaderName, HeaderValue};
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::auction::client::Auctions as AuctionsClient;
pub use crate::domain::datapoint::client::Datapoints as DatapointsClient;
pub use crate::domain::item::client::Items as ItemsClient;
pub use crate::domain::server_realm::client::ServerRealms as ServerRealmsClient;

/// The primary entry point for the Lotkeeper market data API.
///
/// Provides nested sub-client accessors for each domain:
/// `client.items()`, `client.auctions()`, etc. Cloning is cheap and clones
/// share one connection pool.
#[derive(Debug, Clone)]
pub struct LotkeeperClient {
    pub(crate) http: LotkeeperHttp,
}

impl LotkeeperClient {
    pub fn builder() -> LotkeeperClientBuilder {
        LotkeeperClientBuilder::default()
    }

    /// Client for the host named by `LOT_HOST` or `PUBLIC_LOT_HOST`.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, SdkError> {
        LotkeeperClientBuilder::from_env().build()
    }

    pub fn host(&self) -> &str {
        self.http.host()
    }

    /// Low-level access returning wire types.
    pub fn http(&self) -> &LotkeeperHttp {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn server_realms(&self) -> ServerRealms<'_> {
        ServerRealms { client: self }
    }

    pub fn items(&self) -> Items<'_> {
        Items { client: self }
    }

    pub fn auctions(&self) -> Auctions<'_> {
        Auctions { client: self }
    }

    pub fn datapoints(&self) -> Datapoints<'_> {
        Datapoints { client: self }
    }

    /// Backend liveness; `"ok"` when healthy.
    pub async fn health(&self) -> Result<String, SdkError> {
        Ok(self.http.get_health().await?.status)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct LotkeeperClientBuilder {
    host: String,
    timeout: Duration,
    headers: Vec<(String, String)>,
    retry: RetryPolicy,
}

impl Default for LotkeeperClientBuilder {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            timeout: Duration::from_secs(30),
            headers: Vec::new(),
            retry: RetryPolicy::None,
        }
    }
}

impl LotkeeperClientBuilder {
    /// Builder seeded from the environment, see [`LotkeeperClient::from_env`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let host = [HOST_ENV_VAR, PUBLIC_HOST_ENV_VAR]
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|value| !value.trim().is_empty());

        match host {
            Some(host) => Self::default().host(host.trim()),
            None => Self::default(),
        }
    }

    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    /// Per-request timeout. Ignored on wasm.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Extra header sent with every request.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> Result<LotkeeperClient, SdkError> {
        let host = self.host.trim().trim_end_matches('/');
        validate_host(host)?;

        let mut headers = json_headers();
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| SdkError::Config(format!("invalid header name {:?}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| SdkError::Config(format!("invalid value for header {}: {}", name, e)))?;
            headers.insert(name, value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(self.timeout).pool_max_idle_per_host(10);
        }
        let client = builder.build().map_err(HttpError::from)?;

        tracing::debug!(host, "Built Lotkeeper client");

        Ok(LotkeeperClient {
            http: LotkeeperHttp::with_client(host, client, self.retry),
        })
    }
}

fn validate_host(host: &str) -> Result<(), SdkError> {
    let url = reqwest::Url::parse(host)
        .map_err(|e| SdkError::Config(format!("invalid host {:?}: {}", host, e)))?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(()),
        "http" | "https" => Err(SdkError::Config(format!("host {:?} has no hostname", host))),
        other => Err(SdkError::Config(format!(
            "host {:?} must use http or https, not {}",
            host, other
        ))),
    }
}
