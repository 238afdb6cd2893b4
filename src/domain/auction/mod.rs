//! Auction domain: live listings and their filters.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::domain::item::Item;
use crate::shared::{Money, Quality};
use serde::{Deserialize, Serialize};

/// A live auction listing. Prices are per unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    pub item: Item,
    pub unit_buyout_price: Money,
    pub unit_starting_bid_price: Money,
    pub quantity: u32,
}

impl Auction {
    /// Buyout for the whole stack.
    pub fn total_buyout_price(&self) -> Money {
        Money::from_copper(
            self.unit_buyout_price
                .as_copper()
                .saturating_mul(u64::from(self.quantity)),
        )
    }

    /// A zero buyout means the listing is bid-only.
    pub fn has_buyout(&self) -> bool {
        self.unit_buyout_price > Money::ZERO
    }
}

/// Optional filters for `GET /auctions/{server}/{realm}`, matched against the
/// auctioned item.
///
/// Only set fields are sent. Empty strings and a zero item id count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionFilter {
    pub item_id: Option<u64>,
    pub item_name: Option<String>,
    pub item_quality: Option<Quality>,
    pub item_level: Option<u32>,
    pub item_class_index: Option<u32>,
    pub item_class_name: Option<String>,
}

impl AuctionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_id(mut self, item_id: u64) -> Self {
        self.item_id = Some(item_id);
        self
    }

    pub fn item_name(mut self, item_name: impl Into<String>) -> Self {
        self.item_name = Some(item_name.into());
        self
    }

    pub fn item_quality(mut self, quality: Quality) -> Self {
        self.item_quality = Some(quality);
        self
    }

    pub fn item_level(mut self, level: u32) -> Self {
        self.item_level = Some(level);
        self
    }

    pub fn item_class_index(mut self, class_index: u32) -> Self {
        self.item_class_index = Some(class_index);
        self
    }

    pub fn item_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.item_class_name = Some(class_name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.item_id.filter(|id| *id != 0) {
            pairs.push(("item_id", id.to_string()));
        }
        if let Some(name) = self.item_name.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("item_name", name.to_string()));
        }
        if let Some(quality) = self.item_quality {
            pairs.push(("item_quality", quality.as_u8().to_string()));
        }
        if let Some(level) = self.item_level {
            pairs.push(("item_level", level.to_string()));
        }
        if let Some(class_index) = self.item_class_index {
            pairs.push(("item_class_index", class_index.to_string()));
        }
        if let Some(class_name) = self.item_class_name.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("item_class_name", class_name.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linen() -> Item {
        Item {
            id: 2589,
            name: "Linen Cloth".to_string(),
            link: String::new(),
            icon: String::new(),
            level: 5,
            quality: Quality::Common,
            max_stack_size: 20,
            vendor_price: Money::from_copper(13),
            class_index: 7,
            class_name: "Trade Goods".to_string(),
        }
    }

    #[test]
    fn test_total_buyout() {
        let auction = Auction {
            item: linen(),
            unit_buyout_price: Money::from_copper(95),
            unit_starting_bid_price: Money::from_copper(80),
            quantity: 20,
        };
        assert_eq!(auction.total_buyout_price().as_copper(), 1900);
        assert!(auction.has_buyout());
    }

    #[test]
    fn test_filter_uses_prefixed_names() {
        let pairs = AuctionFilter::new()
            .item_id(2589)
            .item_name("Linen")
            .item_quality(Quality::Common)
            .item_level(5)
            .item_class_index(7)
            .item_class_name("Trade Goods")
            .query_pairs();
        let names: Vec<_> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            vec![
                "item_id",
                "item_name",
                "item_quality",
                "item_level",
                "item_class_index",
                "item_class_name"
            ]
        );
    }

    #[test]
    fn test_empty_filter() {
        assert!(AuctionFilter::new().is_empty());
        assert!(AuctionFilter::new().item_id(0).item_name("").is_empty());
        assert!(!AuctionFilter::new().item_level(0).is_empty());
    }
}
