//! Server realms sub-client.

use crate::client::LotkeeperClient;
use crate::domain::server_realm::ServerRealm;
use crate::error::SdkError;

/// Sub-client for server realm lookups.
pub struct ServerRealms<'a> {
    pub(crate) client: &'a LotkeeperClient,
}

impl<'a> ServerRealms<'a> {
    /// All tracked servers with their realms.
    pub async fn list(&self) -> Result<Vec<ServerRealm>, SdkError> {
        let resp = self.client.http.get_server_realms().await?;
        Ok(resp.into_iter().map(ServerRealm::from).collect())
    }

    /// One server with the single realm matching `realm_slug`.
    ///
    /// An unknown combination is a 404, see [`SdkError::is_not_found`].
    pub async fn get(&self, server_slug: &str, realm_slug: &str) -> Result<ServerRealm, SdkError> {
        let resp = self
            .client
            .http
            .get_server_realm(server_slug, realm_slug)
            .await?;
        Ok(ServerRealm::from(resp))
    }
}
