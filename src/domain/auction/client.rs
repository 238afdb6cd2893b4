//! Auctions sub-client: filtered pages, bulk download, count and value.

use crate::client::LotkeeperClient;
use crate::domain::auction::{Auction, AuctionFilter};
use crate::error::SdkError;
use crate::shared::{Money, Page, PageRequest};

pub struct Auctions<'a> {
    pub(crate) client: &'a LotkeeperClient,
}

impl<'a> Auctions<'a> {
    pub async fn filtered(
        &self,
        server: &str,
        realm: &str,
        filter: &AuctionFilter,
        page: PageRequest,
    ) -> Result<Page<Auction>, SdkError> {
        let resp = self
            .client
            .http
            .get_auctions_filtered(server, realm, filter, page)
            .await?;

        Page::try_from_wire(resp, Auction::try_from).map_err(SdkError::Validation)
    }

    /// Every live auction on the realm, unpaginated.
    pub async fn bulk(&self, server: &str, realm: &str) -> Result<Vec<Auction>, SdkError> {
        let resp = self.client.http.get_auctions_bulk(server, realm).await?;
        Ok(resp
            .into_iter()
            .map(Auction::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }

    pub async fn count(&self, server: &str, realm: &str) -> Result<u64, SdkError> {
        Ok(self.client.http.get_auctions_count(server, realm).await?)
    }

    /// Summed buyout value of every live auction.
    pub async fn value(&self, server: &str, realm: &str) -> Result<Money, SdkError> {
        let copper = self.client.http.get_auctions_value(server, realm).await?;
        Ok(Money::from_copper(copper))
    }
}
