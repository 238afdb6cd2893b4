//! Wire types for auction responses.

use crate::domain::item::wire::ItemResponse;
use serde::{Deserialize, Serialize};

/// REST representation of one auction listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionResponse {
    pub item: ItemResponse,
    pub unit_buyout_price: u64,
    pub unit_starting_bid_price: u64,
    pub quantity: u32,
}
