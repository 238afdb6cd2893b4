//! Realm faction classification.
//!
//! Realm names on some servers carry a faction suffix (`"Stormrage Alliance"`);
//! a realm without one is shared by both factions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Alliance,
    Horde,
    CrossFaction,
}

impl Faction {
    pub fn of(realm: &str) -> Self {
        if is_alliance_realm(realm) {
            Faction::Alliance
        } else if is_horde_realm(realm) {
            Faction::Horde
        } else {
            Faction::CrossFaction
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Faction::Alliance => "Alliance",
            Faction::Horde => "Horde",
            Faction::CrossFaction => "Cross-faction",
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn is_alliance_realm(realm: &str) -> bool {
    realm.to_lowercase().contains("alliance")
}

pub fn is_horde_realm(realm: &str) -> bool {
    realm.to_lowercase().contains("horde")
}

pub fn is_cross_faction_realm(realm: &str) -> bool {
    !is_alliance_realm(realm) && !is_horde_realm(realm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faction_predicates() {
        assert!(is_alliance_realm("Stormrage Alliance"));
        assert!(!is_horde_realm("Stormrage Alliance"));
        assert!(is_cross_faction_realm("Stormrage"));
        assert!(is_horde_realm("stormrage-horde"));
        assert!(!is_cross_faction_realm("Stormrage Horde"));
    }

    #[test]
    fn test_faction_of() {
        assert_eq!(Faction::of("Gurubashi ALLIANCE"), Faction::Alliance);
        assert_eq!(Faction::of("Gurubashi Horde"), Faction::Horde);
        assert_eq!(Faction::of("Nordanaar"), Faction::CrossFaction);
        assert_eq!(Faction::CrossFaction.to_string(), "Cross-faction");
    }
}
