//! Conversion: ServerRealmResponse → ServerRealm.
//!
//! The backend always fills the slugs; a missing one is derived locally.

use super::wire;
use super::{Realm, ServerRealm};
use crate::shared::to_slug;

impl From<wire::RealmResponse> for Realm {
    fn from(source: wire::RealmResponse) -> Self {
        let realm_slug = source
            .realm_slug
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| to_slug(&source.realm));
        Self {
            realm: source.realm,
            realm_slug,
        }
    }
}

impl From<wire::ServerRealmResponse> for ServerRealm {
    fn from(source: wire::ServerRealmResponse) -> Self {
        let server_slug = source
            .server_slug
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| to_slug(&source.server));
        Self {
            server: source.server,
            server_slug,
            realms: source.realms.into_iter().map(Realm::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_pass_through() {
        let raw: wire::ServerRealmResponse = serde_json::from_str(
            r#"{"server":"Turtle WoW","server_slug":"turtle-wow","realms":[{"realm":"Nordanaar","realm_slug":"nordanaar"}]}"#,
        )
        .unwrap();
        let sr = ServerRealm::from(raw);
        assert_eq!(sr.server_slug, "turtle-wow");
        assert_eq!(sr.realms[0].realm_slug, "nordanaar");
    }

    #[test]
    fn test_missing_slugs_are_derived() {
        let raw: wire::ServerRealmResponse = serde_json::from_str(
            r#"{"server":"Project Epoch","server_slug":null,"realms":[{"realm":"Kezan's Rest"}]}"#,
        )
        .unwrap();
        let sr = ServerRealm::from(raw);
        assert_eq!(sr.server_slug, "project-epoch");
        assert_eq!(sr.realms[0].realm_slug, "kezans-rest");
    }
}
