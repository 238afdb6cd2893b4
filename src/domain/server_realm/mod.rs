//! Server realm domain: game servers and their realms.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::Faction;
use serde::{Deserialize, Serialize};

/// A realm on a game server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Realm {
    pub realm: String,
    pub realm_slug: String,
}

impl Realm {
    pub fn faction(&self) -> Faction {
        Faction::of(&self.realm)
    }
}

/// A game server and its realms, in the order the backend lists them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRealm {
    pub server: String,
    pub server_slug: String,
    pub realms: Vec<Realm>,
}

impl ServerRealm {
    pub fn find_realm(&self, realm_slug: &str) -> Option<&Realm> {
        self.realms.iter().find(|r| r.realm_slug == realm_slug)
    }

    /// One selectable (server, realm) pair per realm.
    pub fn options(&self) -> Vec<ServerRealmOption> {
        self.realms
            .iter()
            .map(|r| ServerRealmOption {
                server: self.server.clone(),
                server_slug: self.server_slug.clone(),
                realm: r.realm.clone(),
                realm_slug: r.realm_slug.clone(),
            })
            .collect()
    }

    pub fn option_for(&self, realm_slug: &str) -> Option<ServerRealmOption> {
        self.options()
            .into_iter()
            .find(|o| o.realm_slug == realm_slug)
    }
}

/// A flattened (server, realm) pair, as picked in the realm selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServerRealmOption {
    pub server: String,
    pub server_slug: String,
    pub realm: String,
    pub realm_slug: String,
}

impl ServerRealmOption {
    /// Label shown in selectors, e.g. `"Project Epoch - Gurubashi"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.server, self.realm)
    }
}

/// Flatten every server's realms into selectable options.
pub fn all_options(server_realms: &[ServerRealm]) -> Vec<ServerRealmOption> {
    server_realms.iter().flat_map(ServerRealm::options).collect()
}
