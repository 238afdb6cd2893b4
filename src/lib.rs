//! # Lotkeeper SDK
//!
//! A Rust SDK for the Lotkeeper auction-house market data service: server
//! realms, items, live auctions and hourly market summaries for several game
//! servers.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Value types, domain models, formatting helpers and the
//!    selection store (always available, WASM-safe)
//! 2. **HTTP API**: `LotkeeperHttp`, one method per REST endpoint
//! 3. **High-Level Client**: `LotkeeperClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lotkeeper::prelude::*;
//!
//! let client = LotkeeperClient::builder()
//!     .host("https://lotkeeper.example")
//!     .build()?;
//!
//! let realms = client.server_realms().list().await?;
//! let page = client
//!     .items()
//!     .filtered("project-epoch", "gurubashi", &ItemFilter::new().name("Linen"), PageRequest::default())
//!     .await?;
//! println!("{} of {} items", page.data.len(), page.pagination.total);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared value types, formatting helpers and constants.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// App-owned UI selection state.
pub mod state;

/// Unified SDK error types.
pub mod error;

/// Host and API path constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `LotkeeperClient`, the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared value types
    pub use crate::shared::fmt::{format_currency_for_chart, format_relative_time, CurrencyUnit};
    pub use crate::shared::pagination::{Page, PageRequest, PaginationInfo};
    pub use crate::shared::realm::{
        is_alliance_realm, is_cross_faction_realm, is_horde_realm, Faction,
    };
    pub use crate::shared::slug::{from_slug, to_slug};
    pub use crate::shared::{icon_url, Money, Quality};

    // Domain types
    pub use crate::domain::auction::{Auction, AuctionFilter};
    pub use crate::domain::datapoint::{
        HourlySeries, ItemActivityHourlySummary, PriceHourlySummary,
        RealmActivityHourlySummary, TimeRange,
    };
    pub use crate::domain::item::search::{ItemSearchIndex, SearchHit};
    pub use crate::domain::item::{Item, ItemFilter};
    pub use crate::domain::server_realm::{Realm, ServerRealm, ServerRealmOption};

    // State
    pub use crate::state::AppState;

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{API_PREFIX, DEFAULT_HOST};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuctionsClient, DatapointsClient, ItemsClient, LotkeeperClient,
        LotkeeperClientBuilder, ServerRealmsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
