//! Shared value types and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod pagination;
pub mod realm;
pub mod serde_util;
pub mod slug;

pub use pagination::{Page, PageRequest, PaginationInfo};
pub use realm::Faction;
pub use slug::{from_slug, to_slug};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── Money ───────────────────────────────────────────────────────────────────

const COPPER_PER_SILVER: u64 = 100;
const COPPER_PER_GOLD: u64 = 10_000;

/// An amount of in-game currency in copper, the smallest unit.
///
/// `100` copper make a silver and `100` silver make a gold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_copper(copper: u64) -> Self {
        Self(copper)
    }

    pub fn as_copper(&self) -> u64 {
        self.0
    }

    pub fn gold(&self) -> u64 {
        self.0 / COPPER_PER_GOLD
    }

    pub fn silver(&self) -> u64 {
        (self.0 % COPPER_PER_GOLD) / COPPER_PER_SILVER
    }

    pub fn copper(&self) -> u64 {
        self.0 % COPPER_PER_SILVER
    }

    /// Render as the viewer's price-display markup with coin icons.
    ///
    /// Zero parts are omitted; a zero amount renders a single `0` copper.
    pub fn to_html(&self) -> String {
        let mut parts = Vec::new();
        for (amount, icon) in [
            (self.gold(), "icon-gold"),
            (self.silver(), "icon-silver"),
            (self.copper(), "icon-copper"),
        ] {
            if amount > 0 {
                parts.push(format!("{} <span class=\"{}\"></span>", amount, icon));
            }
        }

        let content = if parts.is_empty() {
            "0 <span class=\"icon-copper\"></span>".to_string()
        } else {
            parts.join(" ")
        };
        format!("<span class=\"price-display\">{}</span>", content)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if self.gold() > 0 {
            parts.push(format!("{}g", self.gold()));
        }
        if self.silver() > 0 {
            parts.push(format!("{}s", self.silver()));
        }
        if self.copper() > 0 {
            parts.push(format!("{}c", self.copper()));
        }
        if parts.is_empty() {
            return write!(f, "0c");
        }
        write!(f, "{}", parts.join(" "))
    }
}

impl From<u64> for Money {
    fn from(copper: u64) -> Self {
        Self(copper)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Money(u64::deserialize(deserializer)?))
    }
}

// ─── Quality ─────────────────────────────────────────────────────────────────

/// Item rarity tier, ordinal 0 (Poor) through 7 (Heirloom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Quality {
    Poor = 0,
    Common = 1,
    Uncommon = 2,
    Rare = 3,
    Epic = 4,
    Legendary = 5,
    Artifact = 6,
    Heirloom = 7,
}

impl Quality {
    pub const ALL: [Quality; 8] = [
        Quality::Poor,
        Quality::Common,
        Quality::Uncommon,
        Quality::Rare,
        Quality::Epic,
        Quality::Legendary,
        Quality::Artifact,
        Quality::Heirloom,
    ];

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Quality::Poor => "Poor",
            Quality::Common => "Common",
            Quality::Uncommon => "Uncommon",
            Quality::Rare => "Rare",
            Quality::Epic => "Epic",
            Quality::Legendary => "Legendary",
            Quality::Artifact => "Artifact",
            Quality::Heirloom => "Heirloom",
        }
    }

    /// CSS class the viewer colours item names with.
    pub fn css_class(&self) -> String {
        format!("quality-{}", self.as_u8())
    }
}

impl TryFrom<u8> for Quality {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Quality::ALL.get(value as usize).copied().ok_or(value)
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Quality {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for Quality {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u8::deserialize(deserializer)?;
        Quality::try_from(raw)
            .map_err(|v| serde::de::Error::custom(format!("Invalid item quality: {}", v)))
    }
}

// ─── Servers ─────────────────────────────────────────────────────────────────

/// Game servers the market data service tracks, by slug.
pub const SUPPORTED_SERVERS: [&str; 3] = ["project-epoch", "turtle-wow", "ascension"];

/// Static icon path for a supported server slug.
pub fn server_icon(server_slug: &str) -> Option<&'static str> {
    match server_slug {
        "project-epoch" => Some("/icons/project-epoch.webp"),
        "turtle-wow" => Some("/icons/turtle-wow.webp"),
        "ascension" => Some("/icons/ascension.webp"),
        _ => None,
    }
}

pub fn is_supported_server(server_slug: &str) -> bool {
    SUPPORTED_SERVERS.contains(&server_slug)
}

// ─── Icons ───────────────────────────────────────────────────────────────────

const ICON_BASE_URL: &str = "https://wow.zamimg.com/images/wow/icons/large";

/// Public icon URL for an item icon reference.
///
/// The backend stores client paths like `Interface\Icons\INV_Misc_Bag_07`;
/// only the lowercased last segment is kept.
pub fn icon_url(icon: &str) -> String {
    let file_name = icon
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(icon)
        .to_lowercase();
    format!("{}/{}.jpg", ICON_BASE_URL, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_parts() {
        let m = Money::from_copper(123456);
        assert_eq!(m.gold(), 12);
        assert_eq!(m.silver(), 34);
        assert_eq!(m.copper(), 56);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_copper(123456).to_string(), "12g 34s 56c");
        assert_eq!(Money::from_copper(10_005).to_string(), "1g 5c");
        assert_eq!(Money::from_copper(300).to_string(), "3s");
        assert_eq!(Money::ZERO.to_string(), "0c");
    }

    #[test]
    fn test_money_html() {
        assert_eq!(
            Money::from_copper(120_010).to_html(),
            "<span class=\"price-display\">12 <span class=\"icon-gold\"></span> 10 <span class=\"icon-copper\"></span></span>"
        );
        assert_eq!(
            Money::ZERO.to_html(),
            "<span class=\"price-display\">0 <span class=\"icon-copper\"></span></span>"
        );
    }

    #[test]
    fn test_money_serde_is_plain_number() {
        let json = serde_json::to_string(&Money::from_copper(4200)).unwrap();
        assert_eq!(json, "4200");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_copper(), 4200);
    }

    #[test]
    fn test_quality_range() {
        assert_eq!(Quality::try_from(0), Ok(Quality::Poor));
        assert_eq!(Quality::try_from(7), Ok(Quality::Heirloom));
        assert_eq!(Quality::try_from(8), Err(8));
        assert_eq!(Quality::Epic.name(), "Epic");
        assert_eq!(Quality::Rare.css_class(), "quality-3");
    }

    #[test]
    fn test_quality_serde() {
        let q: Quality = serde_json::from_str("4").unwrap();
        assert_eq!(q, Quality::Epic);
        assert!(serde_json::from_str::<Quality>("12").is_err());
    }

    #[test]
    fn test_icon_url_uses_last_segment() {
        assert_eq!(
            icon_url("Interface\\Icons\\INV_Misc_Bag_07"),
            "https://wow.zamimg.com/images/wow/icons/large/inv_misc_bag_07.jpg"
        );
        assert_eq!(
            icon_url("icons/INV_Sword_04"),
            "https://wow.zamimg.com/images/wow/icons/large/inv_sword_04.jpg"
        );
        assert_eq!(
            icon_url("inv_axe_01"),
            "https://wow.zamimg.com/images/wow/icons/large/inv_axe_01.jpg"
        );
    }

    #[test]
    fn test_supported_servers() {
        assert!(is_supported_server("turtle-wow"));
        assert!(!is_supported_server("retail"));
        assert_eq!(server_icon("ascension"), Some("/icons/ascension.webp"));
        assert_eq!(server_icon("retail"), None);
    }
}
