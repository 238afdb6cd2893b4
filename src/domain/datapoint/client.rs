//! Datapoints sub-client: hourly summaries for items and realms.

use crate::client::LotkeeperClient;
use crate::domain::datapoint::{
    HourlySeries, ItemActivityHourlySummary, PriceHourlySummary, RealmActivityHourlySummary,
    TimeRange,
};
use crate::error::SdkError;

pub struct Datapoints<'a> {
    pub(crate) client: &'a LotkeeperClient,
}

impl<'a> Datapoints<'a> {
    /// Hourly buyout price distribution for one item.
    pub async fn price_hourly_summary(
        &self,
        server: &str,
        realm: &str,
        item_id: u64,
        range: TimeRange,
    ) -> Result<HourlySeries<PriceHourlySummary>, SdkError> {
        let resp = self
            .client
            .http
            .get_price_hourly_summary(server, realm, item_id, range)
            .await?;
        Ok(HourlySeries::new(
            resp.into_iter().map(PriceHourlySummary::from).collect(),
        )?)
    }

    pub async fn item_activity_hourly_summary(
        &self,
        server: &str,
        realm: &str,
        item_id: u64,
        range: TimeRange,
    ) -> Result<HourlySeries<ItemActivityHourlySummary>, SdkError> {
        let resp = self
            .client
            .http
            .get_item_activity_hourly_summary(server, realm, item_id, range)
            .await?;
        Ok(HourlySeries::new(
            resp.into_iter().map(ItemActivityHourlySummary::from).collect(),
        )?)
    }

    pub async fn realm_activity_hourly_summary(
        &self,
        server: &str,
        realm: &str,
        range: TimeRange,
    ) -> Result<HourlySeries<RealmActivityHourlySummary>, SdkError> {
        let resp = self
            .client
            .http
            .get_realm_activity_hourly_summary(server, realm, range)
            .await?;
        Ok(HourlySeries::new(
            resp.into_iter().map(RealmActivityHourlySummary::from).collect(),
        )?)
    }
}
