//! Recognition results used to seed a ledger
//!
//! The recognition service answers with
//! `{ items: [{name, price}], subtotal, tax, total }`. Missing numbers read
//! as zero and extra fields are ignored. Only a payload whose shape is wrong
//! (not an object, `items` not a list of objects, a name that is not text)
//! is rejected, and callers seeding a ledger treat that as an empty receipt.

use core_kernel::Money;
use serde::{Deserialize, Serialize};

use crate::error::SplitError;
use crate::totals::BillTotals;

/// One recognised line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Money,
}

impl SeedItem {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A recognised receipt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedReceipt {
    #[serde(default)]
    pub items: Vec<SeedItem>,
    #[serde(default)]
    pub subtotal: Money,
    #[serde(default)]
    pub tax: Money,
    #[serde(default)]
    pub total: Money,
}

impl SeedReceipt {
    /// Creates a receipt from items and the three stated totals
    pub fn new(items: Vec<SeedItem>, subtotal: Money, tax: Money, total: Money) -> Self {
        Self {
            items,
            subtotal,
            tax,
            total,
        }
    }

    /// Reads a receipt from the service's JSON text
    ///
    /// # Errors
    ///
    /// Returns `SplitError::MalformedSeed` if the text is not JSON or the
    /// items cannot be read as items
    pub fn from_json_str(payload: &str) -> Result<Self, SplitError> {
        serde_json::from_str(payload).map_err(|e| SplitError::MalformedSeed(e.to_string()))
    }

    /// Reads a receipt from an already parsed JSON value
    ///
    /// # Errors
    ///
    /// Returns `SplitError::MalformedSeed` if the items cannot be read as items
    pub fn from_value(payload: serde_json::Value) -> Result<Self, SplitError> {
        serde_json::from_value(payload).map_err(|e| SplitError::MalformedSeed(e.to_string()))
    }

    /// Returns the stated totals
    pub fn totals(&self) -> BillTotals {
        BillTotals::new(self.subtotal, self.tax, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_full_payload() {
        let seed = SeedReceipt::from_json_str(
            r#"{"items":[{"name":"Margherita Pizza","price":18.99}],"subtotal":18.99,"tax":1.71,"total":20.70}"#,
        )
        .unwrap();

        assert_eq!(seed.items, vec![SeedItem::new("Margherita Pizza", Money::new(dec!(18.99)))]);
        assert_eq!(seed.total.amount(), dec!(20.70));
    }

    #[test]
    fn test_missing_numbers_default_to_zero() {
        let seed = SeedReceipt::from_json_str(r#"{"items":[{"name":"Water"}]}"#).unwrap();

        assert!(seed.items[0].price.is_zero());
        assert_eq!(seed.totals(), BillTotals::default());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let seed = SeedReceipt::from_json_str(
            r#"{"success":true,"items":[{"id":"1","name":"Coca Cola","price":3.5}],"total":50.97,"tip":0}"#,
        )
        .unwrap();

        assert_eq!(seed.items.len(), 1);
        assert_eq!(seed.total.amount(), dec!(50.97));
    }

    #[test]
    fn test_malformed_items_are_rejected() {
        assert!(matches!(
            SeedReceipt::from_json_str(r#"{"items":"pizza"}"#),
            Err(SplitError::MalformedSeed(_))
        ));
        assert!(matches!(
            SeedReceipt::from_json_str(r#"{"items":[{"name":42}]}"#),
            Err(SplitError::MalformedSeed(_))
        ));
        assert!(SeedReceipt::from_json_str("not json").is_err());
    }
}
