//! Conversion: ItemResponse → Item (TryFrom + validation).

use super::wire;
use super::Item;
use crate::domain::ValidationError;
use crate::shared::{Money, Quality};

impl TryFrom<wire::ItemResponse> for Item {
    type Error = ValidationError;

    fn try_from(source: wire::ItemResponse) -> Result<Self, Self::Error> {
        let quality =
            Quality::try_from(source.quality).map_err(|value| ValidationError::InvalidQuality {
                item_id: source.id,
                value,
            })?;

        Ok(Self {
            id: source.id,
            name: source.name,
            link: source.link,
            icon: source.icon,
            level: source.level,
            quality,
            max_stack_size: source.max_stack_size,
            vendor_price: Money::from_copper(source.vendor_price),
            class_index: source.class_index,
            class_name: source.class_name,
        })
    }
}
