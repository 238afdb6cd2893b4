//! Wire types for hourly summary responses.

use crate::shared::serde_util::utc_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHourlySummaryResponse {
    #[serde(with = "utc_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub min_buyout_price: u64,
    pub max_buyout_price: u64,
    pub avg_buyout_price: u64,
    pub median_buyout_price: u64,
    pub p10_buyout_price: u64,
    pub p25_buyout_price: u64,
    pub p75_buyout_price: u64,
    pub p90_buyout_price: u64,
    pub outlier_count: u64,
    pub datapoint_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemActivityHourlySummaryResponse {
    #[serde(with = "utc_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub total_auctions: u64,
    pub total_quantity: u64,
    pub total_market_value: u64,
    pub estimated_market_value: u64,
    pub datapoint_count: u64,
    pub outlier_count: u64,
}

/// Same shape as item activity, but the backend names the bucket `ts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealmActivityHourlySummaryResponse {
    #[serde(with = "utc_timestamp")]
    pub ts: DateTime<Utc>,
    pub total_auctions: u64,
    pub total_quantity: u64,
    pub total_market_value: u64,
    pub estimated_market_value: u64,
    pub datapoint_count: u64,
    pub outlier_count: u64,
}
