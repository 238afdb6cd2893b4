//! Local item search over a bulk download.
//!
//! Built once from `items().bulk(..)` (and optionally `auctions().bulk(..)`)
//! so the search box can answer without further requests.

use super::Item;
use crate::domain::auction::Auction;
use crate::shared::{Money, Quality};
use std::collections::HashMap;

/// One search result with the live market figures for the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub item: Item,
    /// Cheapest per-unit buyout among listings with a buyout.
    pub lowest_unit_buyout: Option<Money>,
    pub listed_quantity: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ItemSearchIndex {
    // Sorted by lowercased name, then id.
    entries: Vec<Entry>,
    by_id: HashMap<u64, usize>,
}

#[derive(Debug, Clone)]
struct Entry {
    key: String,
    hit: SearchHit,
}

impl ItemSearchIndex {
    /// Items seen only in `auctions` are added from the listing.
    pub fn new(items: Vec<Item>, auctions: &[Auction]) -> Self {
        let mut hits: HashMap<u64, SearchHit> = HashMap::with_capacity(items.len());
        for item in items {
            hits.entry(item.id).or_insert_with(|| SearchHit {
                item,
                lowest_unit_buyout: None,
                listed_quantity: 0,
            });
        }

        for auction in auctions {
            let hit = hits.entry(auction.item.id).or_insert_with(|| SearchHit {
                item: auction.item.clone(),
                lowest_unit_buyout: None,
                listed_quantity: 0,
            });
            hit.listed_quantity += u64::from(auction.quantity);
            if auction.has_buyout() {
                hit.lowest_unit_buyout = Some(match hit.lowest_unit_buyout {
                    Some(current) => current.min(auction.unit_buyout_price),
                    None => auction.unit_buyout_price,
                });
            }
        }

        let mut entries: Vec<Entry> = hits
            .into_values()
            .map(|hit| Entry {
                key: hit.item.name.to_lowercase(),
                hit,
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key).then(a.hit.item.id.cmp(&b.hit.item.id)));

        let by_id = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.hit.item.id, i))
            .collect();

        Self { entries, by_id }
    }

    /// Case-insensitive substring match on item names, ordered by name.
    ///
    /// A blank query matches everything.
    pub fn search(&self, query: &str, quality: Option<Quality>) -> Vec<&SearchHit> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| needle.is_empty() || e.key.contains(&needle))
            .filter(|e| quality.map_or(true, |q| e.hit.item.quality == q))
            .map(|e| &e.hit)
            .collect()
    }

    pub fn get(&self, item_id: u64) -> Option<&SearchHit> {
        self.by_id.get(&item_id).map(|&i| &self.entries[i].hit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, name: &str, quality: Quality) -> Item {
        Item {
            id,
            name: name.to_string(),
            link: String::new(),
            icon: String::new(),
            level: 1,
            quality,
            max_stack_size: 20,
            vendor_price: Money::ZERO,
            class_index: 7,
            class_name: "Trade Goods".to_string(),
        }
    }

    fn auction(item: Item, buyout: u64, quantity: u32) -> Auction {
        Auction {
            item,
            unit_buyout_price: Money::from_copper(buyout),
            unit_starting_bid_price: Money::from_copper(buyout / 2),
            quantity,
        }
    }

    fn index() -> ItemSearchIndex {
        let linen = item(2589, "Linen Cloth", Quality::Common);
        let wool = item(2592, "Wool Cloth", Quality::Common);
        let bolt = item(2996, "Bolt of Linen Cloth", Quality::Common);
        let ring = item(9000, "Lucky Ring", Quality::Rare);
        ItemSearchIndex::new(
            vec![linen.clone(), wool, bolt],
            &[
                auction(linen.clone(), 95, 20),
                auction(linen.clone(), 80, 5),
                auction(linen, 0, 3),
                auction(ring, 25_000, 1),
            ],
        )
    }

    #[test]
    fn test_search_is_case_insensitive_and_sorted() {
        let index = index();
        let names: Vec<_> = index
            .search("LINEN", None)
            .iter()
            .map(|h| h.item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Bolt of Linen Cloth", "Linen Cloth"]);
    }

    #[test]
    fn test_market_figures() {
        let index = index();
        let linen = index.get(2589).unwrap();
        assert_eq!(linen.lowest_unit_buyout, Some(Money::from_copper(80)));
        assert_eq!(linen.listed_quantity, 28);

        let wool = index.get(2592).unwrap();
        assert_eq!(wool.lowest_unit_buyout, None);
        assert_eq!(wool.listed_quantity, 0);
    }

    #[test]
    fn test_auction_only_items_are_indexed() {
        let index = index();
        assert_eq!(index.len(), 4);
        assert_eq!(index.get(9000).unwrap().item.name, "Lucky Ring");
    }

    #[test]
    fn test_quality_filter_and_blank_query() {
        let index = index();
        assert_eq!(index.search("  ", None).len(), 4);
        let rare = index.search("", Some(Quality::Rare));
        assert_eq!(rare.len(), 1);
        assert_eq!(rare[0].item.id, 9000);
        assert!(index.search("cloth", Some(Quality::Epic)).is_empty());
    }

    #[test]
    fn test_empty_index() {
        let index = ItemSearchIndex::default();
        assert!(index.is_empty());
        assert!(index.search("anything", None).is_empty());
        assert!(index.get(1).is_none());
    }
}
