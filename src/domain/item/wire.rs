//! Wire types for item responses.

use serde::{Deserialize, Serialize};

/// REST representation of an item on one server realm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub icon: String,
    pub level: u32,
    pub quality: u8,
    pub max_stack_size: u32,
    pub vendor_price: u64,
    pub class_index: u32,
    pub class_name: String,
}
