//! Wire types for server realm responses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealmResponse {
    pub realm: String,
    #[serde(default)]
    pub realm_slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerRealmResponse {
    pub server: String,
    #[serde(default)]
    pub server_slug: Option<String>,
    pub realms: Vec<RealmResponse>,
}
