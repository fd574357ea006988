//! Stated bill totals
//!
//! Subtotal, tax and total come from the receipt and are corrected by hand.
//! They are never recomputed from item prices: recognised totals are often
//! more reliable than recognised lines.

use core_kernel::Money;
use serde::{Deserialize, Serialize};

/// The subtotal/tax/total trio
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillTotals {
    #[serde(default)]
    pub subtotal: Money,
    #[serde(default)]
    pub tax: Money,
    #[serde(default)]
    pub total: Money,
}

impl BillTotals {
    /// Creates totals from the three stated amounts
    pub fn new(subtotal: Money, tax: Money, total: Money) -> Self {
        Self { subtotal, tax, total }
    }

    /// Applies each field present in the patch independently
    pub fn apply(&mut self, patch: TotalsPatch) {
        if let Some(subtotal) = patch.subtotal {
            self.subtotal = subtotal;
        }
        if let Some(tax) = patch.tax {
            self.tax = tax;
        }
        if let Some(total) = patch.total {
            self.total = total;
        }
    }
}

/// A partial edit of the bill totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsPatch {
    #[serde(default)]
    pub subtotal: Option<Money>,
    #[serde(default)]
    pub tax: Option<Money>,
    #[serde(default)]
    pub total: Option<Money>,
}

impl TotalsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subtotal(mut self, amount: Money) -> Self {
        self.subtotal = Some(amount);
        self
    }

    pub fn tax(mut self, amount: Money) -> Self {
        self.tax = Some(amount);
        self
    }

    pub fn total(mut self, amount: Money) -> Self {
        self.total = Some(amount);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_patch_touches_only_present_fields() {
        let mut totals = BillTotals::new(
            Money::new(dec!(50.97)),
            Money::new(dec!(4.58)),
            Money::new(dec!(55.55)),
        );

        totals.apply(TotalsPatch::new().tax(Money::new(dec!(5.00))));

        assert_eq!(totals.subtotal.amount(), dec!(50.97));
        assert_eq!(totals.tax.amount(), dec!(5.00));
        assert_eq!(totals.total.amount(), dec!(55.55));
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let totals: BillTotals = serde_json::from_str(r#"{"total": 12}"#).unwrap();
        assert!(totals.subtotal.is_zero());
        assert!(totals.tax.is_zero());
        assert_eq!(totals.total.amount(), dec!(12));
    }
}
