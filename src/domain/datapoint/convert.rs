//! Conversion: hourly summary responses → domain rows.

use super::wire;
use super::{ItemActivityHourlySummary, PriceHourlySummary, RealmActivityHourlySummary};
use crate::shared::Money;

impl From<wire::PriceHourlySummaryResponse> for PriceHourlySummary {
    fn from(r: wire::PriceHourlySummaryResponse) -> Self {
        Self {
            timestamp: r.timestamp,
            min_buyout: Money::from_copper(r.min_buyout_price),
            max_buyout: Money::from_copper(r.max_buyout_price),
            avg_buyout: Money::from_copper(r.avg_buyout_price),
            median_buyout: Money::from_copper(r.median_buyout_price),
            p10_buyout: Money::from_copper(r.p10_buyout_price),
            p25_buyout: Money::from_copper(r.p25_buyout_price),
            p75_buyout: Money::from_copper(r.p75_buyout_price),
            p90_buyout: Money::from_copper(r.p90_buyout_price),
            outlier_count: r.outlier_count,
            datapoint_count: r.datapoint_count,
        }
    }
}

impl From<wire::ItemActivityHourlySummaryResponse> for ItemActivityHourlySummary {
    fn from(r: wire::ItemActivityHourlySummaryResponse) -> Self {
        Self {
            timestamp: r.timestamp,
            total_auctions: r.total_auctions,
            total_quantity: r.total_quantity,
            total_market_value: Money::from_copper(r.total_market_value),
            estimated_market_value: Money::from_copper(r.estimated_market_value),
            datapoint_count: r.datapoint_count,
            outlier_count: r.outlier_count,
        }
    }
}

impl From<wire::RealmActivityHourlySummaryResponse> for RealmActivityHourlySummary {
    fn from(r: wire::RealmActivityHourlySummaryResponse) -> Self {
        Self {
            timestamp: r.ts,
            total_auctions: r.total_auctions,
            total_quantity: r.total_quantity,
            total_market_value: Money::from_copper(r.total_market_value),
            estimated_market_value: Money::from_copper(r.estimated_market_value),
            datapoint_count: r.datapoint_count,
            outlier_count: r.outlier_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_price_summary_naive_timestamp_is_utc() {
        let raw: wire::PriceHourlySummaryResponse = serde_json::from_str(
            r#"{
                "timestamp": "2025-06-01T13:00:00",
                "min_buyout_price": 90, "max_buyout_price": 400,
                "avg_buyout_price": 120, "median_buyout_price": 110,
                "p10_buyout_price": 95, "p25_buyout_price": 100,
                "p75_buyout_price": 130, "p90_buyout_price": 150,
                "outlier_count": 2, "datapoint_count": 31
            }"#,
        )
        .unwrap();
        let row = PriceHourlySummary::from(raw);
        assert_eq!(row.timestamp, Utc.with_ymd_and_hms(2025, 6, 1, 13, 0, 0).unwrap());
        assert_eq!(row.median_buyout.as_copper(), 110);
        assert_eq!(row.datapoint_count, 31);
    }

    #[test]
    fn test_realm_activity_reads_ts() {
        let raw: wire::RealmActivityHourlySummaryResponse = serde_json::from_str(
            r#"{
                "ts": "2025-06-01T13:00:00+02:00",
                "total_auctions": 5000, "total_quantity": 21000,
                "total_market_value": 98765432, "estimated_market_value": 87654321,
                "datapoint_count": 5000, "outlier_count": 12
            }"#,
        )
        .unwrap();
        let row = RealmActivityHourlySummary::from(raw);
        assert_eq!(row.timestamp, Utc.with_ymd_and_hms(2025, 6, 1, 11, 0, 0).unwrap());
        assert_eq!(row.total_market_value.gold(), 9876);
    }

    #[test]
    fn test_realm_activity_requires_ts() {
        let result: Result<wire::RealmActivityHourlySummaryResponse, _> = serde_json::from_str(
            r#"{
                "timestamp": "2025-06-01T13:00:00",
                "total_auctions": 1, "total_quantity": 1,
                "total_market_value": 1, "estimated_market_value": 1,
                "datapoint_count": 1, "outlier_count": 0
            }"#,
        );
        assert!(result.is_err());
    }
}
