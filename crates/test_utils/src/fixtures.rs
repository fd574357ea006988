//! Pre-built Test Fixtures
//!
//! Provides ready-to-use receipts shared across the bill split test suites.
//! The amounts are fixed so expected splits can be written down by hand.

use core_kernel::Money;
use domain_split::{SeedItem, SeedReceipt};
use rust_decimal_macros::dec;

/// Fixture for recognised receipts
pub struct ReceiptFixtures;

impl ReceiptFixtures {
    /// Two-item dinner: pizza 18.99, salad 12.50, subtotal 31.49, tax 2.83, total 34.32
    pub fn pizza_dinner() -> SeedReceipt {
        SeedReceipt::new(
            vec![
                SeedItem::new("Margherita Pizza", Money::new(dec!(18.99))),
                SeedItem::new("Caesar Salad", Money::new(dec!(12.50))),
            ],
            Money::new(dec!(31.49)),
            Money::new(dec!(2.83)),
            Money::new(dec!(34.32)),
        )
    }

    /// Five-item table, subtotal 50.97, tax 4.58, total 55.55
    pub fn family_table() -> SeedReceipt {
        SeedReceipt::new(
            vec![
                SeedItem::new("Margherita Pizza", Money::new(dec!(18.99))),
                SeedItem::new("Caesar Salad", Money::new(dec!(12.50))),
                SeedItem::new("Garlic Bread", Money::new(dec!(6.99))),
                SeedItem::new("Coca Cola", Money::new(dec!(3.50))),
                SeedItem::new("Tiramisu", Money::new(dec!(8.99))),
            ],
            Money::new(dec!(50.97)),
            Money::new(dec!(4.58)),
            Money::new(dec!(55.55)),
        )
    }
}

/// Fixture for raw recognition service payloads
pub struct PayloadFixtures;

impl PayloadFixtures {
    /// The pizza dinner as the service sends it
    pub fn pizza_dinner_json() -> serde_json::Value {
        serde_json::json!({
            "items": [
                { "name": "Margherita Pizza", "price": 18.99 },
                { "name": "Caesar Salad", "price": 12.5 }
            ],
            "subtotal": 31.49,
            "tax": 2.83,
            "total": 34.32
        })
    }

    /// A payload with extra fields and no subtotal
    pub fn with_extra_fields_json() -> serde_json::Value {
        serde_json::json!({
            "success": true,
            "items": [
                { "id": "1", "name": "Garlic Bread", "price": 6.99 },
                { "id": "2", "name": "Coca Cola", "price": 3.5 }
            ],
            "total": 10.49,
            "tax": 0,
            "tip": 0
        })
    }

    /// A payload whose items cannot be read
    pub fn malformed() -> &'static str {
        r#"{"items": "Margherita Pizza 18.99", "total": 34.32}"#
    }
}

/// Fixture for text as it comes back from character recognition
pub struct TextFixtures;

impl TextFixtures {
    /// Recognised lines of the pizza dinner receipt, including noise
    pub fn pizza_dinner_lines() -> Vec<&'static str> {
        vec![
            "LUIGI'S TRATTORIA",
            "12 Harbour Street",
            "Table 4",
            "",
            "Margherita Pizza 18.99",
            "Caesar Salad 12.50",
            "Subtotal 31.49",
            "Tax 9% 2.83",
            "TOTAL 34.32",
            "Thank you!",
        ]
    }

    /// The same receipt as one block of text
    pub fn pizza_dinner_text() -> String {
        Self::pizza_dinner_lines().join("\n")
    }
}

/// Fixture for participant names
pub struct PeopleFixtures;

impl PeopleFixtures {
    /// The group from the split screen
    pub fn group() -> [&'static str; 3] {
        ["Ali", "Sara", "Ahmed"]
    }
}
