//! Conversion: AuctionResponse → Auction (TryFrom + validation).

use super::wire;
use super::Auction;
use crate::domain::item::Item;
use crate::domain::ValidationError;
use crate::shared::Money;

impl TryFrom<wire::AuctionResponse> for Auction {
    type Error = ValidationError;

    fn try_from(source: wire::AuctionResponse) -> Result<Self, Self::Error> {
        if source.quantity == 0 {
            return Err(ValidationError::ZeroQuantity {
                item_id: source.item.id,
            });
        }

        Ok(Self {
            item: Item::try_from(source.item)?,
            unit_buyout_price: Money::from_copper(source.unit_buyout_price),
            unit_starting_bid_price: Money::from_copper(source.unit_starting_bid_price),
            quantity: source.quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = r#"{
        "item": {
            "id": 2589, "name": "Linen Cloth", "link": "", "icon": "inv_fabric_linen_01",
            "level": 5, "quality": 1, "max_stack_size": 20, "vendor_price": 13,
            "class_index": 7, "class_name": "Trade Goods"
        },
        "unit_buyout_price": 95,
        "unit_starting_bid_price": 80,
        "quantity": 20
    }"#;

    #[test]
    fn test_auction_converts_with_item() {
        let raw: wire::AuctionResponse = serde_json::from_str(RAW).unwrap();
        let auction = Auction::try_from(raw).unwrap();
        assert_eq!(auction.item.id, 2589);
        assert_eq!(auction.unit_buyout_price.as_copper(), 95);
        assert_eq!(auction.quantity, 20);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut raw: wire::AuctionResponse = serde_json::from_str(RAW).unwrap();
        raw.quantity = 0;
        assert_eq!(
            Auction::try_from(raw).unwrap_err(),
            ValidationError::ZeroQuantity { item_id: 2589 }
        );
    }

    #[test]
    fn test_nested_item_quality_checked() {
        let mut raw: wire::AuctionResponse = serde_json::from_str(RAW).unwrap();
        raw.item.quality = 8;
        assert!(matches!(
            Auction::try_from(raw),
            Err(ValidationError::InvalidQuality { value: 8, .. })
        ));
    }
}
