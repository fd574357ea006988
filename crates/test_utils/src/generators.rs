//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating receipts and edit inputs
//! that look like what people actually type.

use core_kernel::Money;
use domain_split::{SeedItem, SeedReceipt};
use fake::faker::name::en::FirstName;
use fake::Fake;
use proptest::prelude::*;

/// Strategy for item prices between 0.00 and 999.99
pub fn price_strategy() -> impl Strategy<Value = Money> {
    (0i64..100_000i64).prop_map(Money::from_cents)
}

/// Strategy for stated totals, which may be anything a person types
pub fn stated_amount_strategy() -> impl Strategy<Value = Money> {
    (-10_000i64..1_000_000i64).prop_map(Money::from_cents)
}

/// Strategy for item names
pub fn item_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}( [A-Z][a-z]{2,10})?"
}

/// Strategy for raw participant input, including padding and blanks
pub fn raw_participant_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[A-Z][a-z]{1,6}",
        " [A-Z][a-z]{1,6} ",
    ]
}

/// Strategy for seed receipts with up to `max_items` items
pub fn seed_receipt_strategy(max_items: usize) -> impl Strategy<Value = SeedReceipt> {
    (
        prop::collection::vec((item_name_strategy(), price_strategy()), 0..=max_items),
        stated_amount_strategy(),
        stated_amount_strategy(),
        stated_amount_strategy(),
    )
        .prop_map(|(items, subtotal, tax, total)| {
            let items = items
                .into_iter()
                .map(|(name, price)| SeedItem::new(name, price))
                .collect();
            SeedReceipt::new(items, subtotal, tax, total)
        })
}

/// Returns `count` distinct made-up first names
pub fn fake_group(count: usize) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(count);
    while names.len() < count {
        let name: String = FirstName().fake();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_group_is_distinct() {
        let group = fake_group(4);
        assert_eq!(group.len(), 4);
        for (i, name) in group.iter().enumerate() {
            assert!(!group[i + 1..].contains(name));
        }
    }

    proptest! {
        #[test]
        fn generated_prices_are_non_negative(price in price_strategy()) {
            prop_assert!(!price.is_negative());
        }

        #[test]
        fn generated_receipts_respect_size(receipt in seed_receipt_strategy(5)) {
            prop_assert!(receipt.items.len() <= 5);
        }
    }
}
