//! Items sub-client: filtered pages, bulk download, counts.

use crate::client::LotkeeperClient;
use crate::domain::item::{Item, ItemFilter};
use crate::error::SdkError;
use crate::shared::{Page, PageRequest};

/// Sub-client for item operations on one server realm at a time.
pub struct Items<'a> {
    pub(crate) client: &'a LotkeeperClient,
}

impl<'a> Items<'a> {
    /// One page of items matching `filter`.
    ///
    /// Backslashes are stripped from item names.
    pub async fn filtered(
        &self,
        server: &str,
        realm: &str,
        filter: &ItemFilter,
        page: PageRequest,
    ) -> Result<Page<Item>, SdkError> {
        let resp = self
            .client
            .http
            .get_items_filtered(server, realm, filter, page)
            .await?;

        Page::try_from_wire(resp, |raw| {
            Item::try_from(raw).map(Item::strip_name_escapes)
        })
        .map_err(SdkError::Validation)
    }

    /// Every item on the realm, unpaginated.
    pub async fn bulk(&self, server: &str, realm: &str) -> Result<Vec<Item>, SdkError> {
        let resp = self.client.http.get_items_bulk(server, realm).await?;
        Ok(resp
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }

    pub async fn count(&self, server: &str, realm: &str) -> Result<u64, SdkError> {
        Ok(self.client.http.get_items_count(server, realm).await?)
    }
}
