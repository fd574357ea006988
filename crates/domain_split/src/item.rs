//! Bill line items

use core_kernel::{ItemId, Money};
use serde::{Deserialize, Serialize};

/// Name given to items added by hand
pub const PLACEHOLDER_ITEM_NAME: &str = "New item";

/// One billable line of a receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier, never reused within a ledger
    pub id: ItemId,
    /// Free text name
    pub name: String,
    /// Non-negative price
    pub price: Money,
}

impl Item {
    /// Creates a new item, clamping a negative price to zero
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.non_negative(),
        }
    }

    /// Applies an update, keeping fields the update leaves out
    pub(crate) fn apply(&mut self, update: ItemUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price.non_negative();
        }
    }
}

/// A partial edit of an item
///
/// Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdate {
    /// New name
    #[serde(default)]
    pub name: Option<String>,
    /// New price; negative or unusable input becomes zero
    #[serde(default)]
    pub price: Option<Money>,
}

impl ItemUpdate {
    /// An update that only renames
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            price: None,
        }
    }

    /// An update that only reprices
    pub fn reprice(price: Money) -> Self {
        Self {
            name: None,
            price: Some(price),
        }
    }

    /// Returns true if the update changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}
