//! Auction datapoint domain: hourly price and activity summaries.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::domain::ValidationError;
use crate::shared::fmt::epoch_timestamp;
use crate::shared::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── TimeRange ───────────────────────────────────────────────────────────────

/// Optional UNIX-second bounds for an hourly summary query.
///
/// Unset bounds are not sent and the backend falls back to the last 31 days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: Option<i64>,
    pub to: Option<i64>,
}

impl TimeRange {
    /// No bounds; the backend default window applies.
    pub fn server_default() -> Self {
        Self::default()
    }

    pub fn between(from: i64, to: i64) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn since(from: i64) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    /// The `days` days up to `now`.
    pub fn last_days(now: DateTime<Utc>, days: u32) -> Self {
        Self::between(epoch_timestamp(now, days), now.timestamp())
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(from) = self.from {
            pairs.push(("from_timestamp", from.to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("to_timestamp", to.to_string()));
        }
        pairs
    }
}

// ─── Summaries ───────────────────────────────────────────────────────────────

/// Buyout price distribution of one item over one UTC hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceHourlySummary {
    pub timestamp: DateTime<Utc>,
    pub min_buyout: Money,
    pub max_buyout: Money,
    pub avg_buyout: Money,
    pub median_buyout: Money,
    pub p10_buyout: Money,
    pub p25_buyout: Money,
    pub p75_buyout: Money,
    pub p90_buyout: Money,
    pub outlier_count: u64,
    pub datapoint_count: u64,
}

/// Market activity of one item over one UTC hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemActivityHourlySummary {
    pub timestamp: DateTime<Utc>,
    pub total_auctions: u64,
    pub total_quantity: u64,
    pub total_market_value: Money,
    pub estimated_market_value: Money,
    pub datapoint_count: u64,
    pub outlier_count: u64,
}

/// Market activity of a whole realm over one UTC hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmActivityHourlySummary {
    pub timestamp: DateTime<Utc>,
    pub total_auctions: u64,
    pub total_quantity: u64,
    pub total_market_value: Money,
    pub estimated_market_value: Money,
    pub datapoint_count: u64,
    pub outlier_count: u64,
}

/// A row keyed by its hour bucket.
pub trait HourlyBucket {
    fn bucket(&self) -> DateTime<Utc>;
}

impl HourlyBucket for PriceHourlySummary {
    fn bucket(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl HourlyBucket for ItemActivityHourlySummary {
    fn bucket(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl HourlyBucket for RealmActivityHourlySummary {
    fn bucket(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

// ─── HourlySeries ────────────────────────────────────────────────────────────

/// Hourly rows with strictly increasing timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlySeries<T> {
    rows: Vec<T>,
}

impl<T: HourlyBucket> HourlySeries<T> {
    pub fn new(rows: Vec<T>) -> Result<Self, ValidationError> {
        if let Some(index) = rows
            .windows(2)
            .position(|pair| pair[1].bucket() <= pair[0].bucket())
        {
            return Err(ValidationError::UnorderedTimestamps { index: index + 1 });
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first_bucket(&self) -> Option<DateTime<Utc>> {
        self.rows.first().map(HourlyBucket::bucket)
    }

    pub fn last_bucket(&self) -> Option<DateTime<Utc>> {
        self.rows.last().map(HourlyBucket::bucket)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }
}

impl<'a, T> IntoIterator for &'a HourlySeries<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<T> IntoIterator for HourlySeries<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
