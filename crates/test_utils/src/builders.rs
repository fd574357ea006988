//! Test Data Builders
//!
//! Provides a builder for ledgers in a known state. Tests specify only the
//! receipt, people and assignments they care about.

use core_kernel::{ItemId, Money};
use domain_split::{Ledger, LedgerOptions, SeedItem, SeedReceipt, TotalsPatch};

use crate::fixtures::ReceiptFixtures;

/// Builder for constructing ledgers for tests
pub struct LedgerBuilder {
    receipt: SeedReceipt,
    options: LedgerOptions,
    participants: Vec<String>,
    assignments: Vec<(ItemId, String)>,
    totals: TotalsPatch,
}

impl Default for LedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerBuilder {
    /// Creates a builder over an empty receipt
    pub fn new() -> Self {
        Self {
            receipt: SeedReceipt::default(),
            options: LedgerOptions::default(),
            participants: Vec::new(),
            assignments: Vec::new(),
            totals: TotalsPatch::default(),
        }
    }

    /// Creates a builder over the pizza dinner receipt
    pub fn pizza_dinner() -> Self {
        Self::new().with_receipt(ReceiptFixtures::pizza_dinner())
    }

    /// Sets the seed receipt
    pub fn with_receipt(mut self, receipt: SeedReceipt) -> Self {
        self.receipt = receipt;
        self
    }

    /// Appends an item to the seed receipt
    pub fn with_item(mut self, name: &str, price: Money) -> Self {
        self.receipt.items.push(SeedItem::new(name, price));
        self
    }

    /// Sets the ledger options
    pub fn with_options(mut self, options: LedgerOptions) -> Self {
        self.options = options;
        self
    }

    /// Adds a participant after seeding
    pub fn with_participant(mut self, name: &str) -> Self {
        self.participants.push(name.to_string());
        self
    }

    /// Adds several participants after seeding
    pub fn with_participants(mut self, names: &[&str]) -> Self {
        self.participants.extend(names.iter().map(|n| n.to_string()));
        self
    }

    /// Assigns an item (by seed position, starting at 1) to a participant
    pub fn assign(mut self, item: u64, participant: &str) -> Self {
        self.assignments.push((ItemId::from(item), participant.to_string()));
        self
    }

    /// Overrides the stated total
    pub fn with_total(mut self, total: Money) -> Self {
        self.totals.total = Some(total);
        self
    }

    /// Builds the ledger
    ///
    /// # Panics
    ///
    /// Panics if a participant or assignment is rejected, since that means
    /// the test setup itself is wrong
    pub fn build(self) -> Ledger {
        let mut ledger = Ledger::seed_with(self.receipt, &self.options);

        for name in &self.participants {
            ledger
                .add_participant(name)
                .unwrap_or_else(|e| panic!("invalid test participant {name:?}: {e}"));
        }
        for (item, name) in &self.assignments {
            ledger
                .assign(item, name)
                .unwrap_or_else(|e| panic!("invalid test assignment {item} -> {name:?}: {e}"));
        }
        ledger.set_totals(self.totals);

        ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder_assigns() {
        let ledger = LedgerBuilder::pizza_dinner()
            .with_participants(&["Ali", "Sara"])
            .assign(1, "Ali")
            .build();

        assert_eq!(ledger.share_of("Ali"), Some(Money::new(dec!(18.99))));
        assert_eq!(ledger.share_of("Sara"), Some(Money::zero()));
    }

    #[test]
    fn test_builder_total_override() {
        let ledger = LedgerBuilder::new()
            .with_item("Tea", Money::new(dec!(2.00)))
            .with_total(Money::new(dec!(2.00)))
            .build();

        assert_eq!(ledger.totals().total.amount(), dec!(2.00));
        assert!(ledger.totals().subtotal.is_zero());
    }
}
