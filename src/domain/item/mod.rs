//! Item domain: item records, list filters, local search.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod search;
pub mod wire;

use crate::shared::{icon_url, to_slug, Money, Quality};
use serde::{Deserialize, Serialize};

// ─── Item ────────────────────────────────────────────────────────────────────

/// An item as listed on one server realm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub link: String,
    pub icon: String,
    pub level: u32,
    pub quality: Quality,
    pub max_stack_size: u32,
    pub vendor_price: Money,
    pub class_index: u32,
    pub class_name: String,
}

impl Item {
    pub fn icon_url(&self) -> String {
        icon_url(&self.icon)
    }

    /// Slug used in item page URLs.
    pub fn slug(&self) -> String {
        to_slug(&self.name)
    }

    /// Remove backslashes left in names by upstream escaping.
    ///
    /// Workaround for a known bad record (`BKP \"Sparrow\" Smallbore`); only
    /// applied to filtered item pages.
    pub(crate) fn strip_name_escapes(mut self) -> Self {
        if self.name.contains('\\') {
            self.name = self.name.replace('\\', "");
        }
        self
    }
}

// ─── ItemFilter ──────────────────────────────────────────────────────────────

/// Optional filters for `GET /items/{server}/{realm}`.
///
/// Only set fields are sent. Empty strings and a zero id count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFilter {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub quality: Option<Quality>,
    pub level: Option<u32>,
    pub class_index: Option<u32>,
    pub class_name: Option<String>,
}

impl ItemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn quality(mut self, quality: Quality) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn class_index(mut self, class_index: u32) -> Self {
        self.class_index = Some(class_index);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.id.filter(|id| *id != 0) {
            pairs.push(("id", id.to_string()));
        }
        if let Some(name) = self.name.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("name", name.to_string()));
        }
        if let Some(quality) = self.quality {
            pairs.push(("quality", quality.as_u8().to_string()));
        }
        if let Some(level) = self.level {
            pairs.push(("level", level.to_string()));
        }
        if let Some(class_index) = self.class_index {
            pairs.push(("class_index", class_index.to_string()));
        }
        if let Some(class_name) = self.class_name.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("class_name", class_name.to_string()));
        }
        pairs
    }
}
