//! Custom Test Assertions
//!
//! Provides assertion helpers for money and ledgers that give more
//! meaningful failure messages than standard assertions.

use std::collections::HashSet;

use core_kernel::Money;
use domain_split::Ledger;
use rust_decimal::Decimal;

/// Asserts that two Money values are equal to the cent
pub fn assert_money_eq_cents(actual: Money, expected: Money) {
    assert_eq!(
        actual.round_to_cents(),
        expected.round_to_cents(),
        "Money amounts differ: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that a Money value has the given decimal amount
pub fn assert_amount(actual: Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Expected amount {}, got {}",
        expected,
        actual.amount()
    );
}

/// Asserts that a participant owes exactly `expected`
pub fn assert_share(ledger: &Ledger, participant: &str, expected: Money) {
    match ledger.share_of(participant) {
        Some(actual) => assert_eq!(
            actual, expected,
            "Share of {participant} is {actual}, expected {expected}"
        ),
        None => panic!("{participant} is not a participant"),
    }
}

/// Asserts every structural invariant of a ledger
///
/// - assignment keys are existing items
/// - assignment values are current participants
/// - item ids are unique
/// - participant names are unique, trimmed and non-empty
/// - every participant appears exactly once in the computed totals
pub fn assert_ledger_invariants(ledger: &Ledger) {
    for (item_id, assignee) in ledger.assignments() {
        assert!(
            ledger.item(item_id).is_some(),
            "Assignment refers to missing item {item_id}"
        );
        assert!(
            ledger.has_participant(assignee.as_str()),
            "Assignment of {item_id} refers to missing participant {assignee}"
        );
    }

    let mut ids = HashSet::new();
    for item in ledger.items() {
        assert!(ids.insert(&item.id), "Duplicate item id {}", item.id);
        assert!(!item.price.is_negative(), "Item {} has negative price", item.id);
    }

    let mut names = HashSet::new();
    for name in ledger.participants() {
        assert!(!name.as_str().is_empty(), "Empty participant name");
        assert_eq!(name.as_str(), name.as_str().trim(), "Untrimmed participant name");
        assert!(names.insert(name.as_str()), "Duplicate participant {name}");
    }

    let shares = ledger.compute_totals();
    assert_eq!(shares.len(), ledger.participants().len());
    for (share, name) in shares.iter().zip(ledger.participants()) {
        assert_eq!(&share.participant, name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::LedgerBuilder;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_eq_cents_ignores_sub_cent_noise() {
        assert_money_eq_cents(Money::new(dec!(2.8301)), Money::new(dec!(2.83)));
    }

    #[test]
    #[should_panic(expected = "Money amounts differ")]
    fn test_money_eq_cents_fails() {
        assert_money_eq_cents(Money::new(dec!(2.84)), Money::new(dec!(2.83)));
    }

    #[test]
    fn test_invariants_hold_for_built_ledger() {
        let ledger = LedgerBuilder::pizza_dinner()
            .with_participants(&["Ali", "Sara"])
            .assign(1, "Ali")
            .assign(2, "Sara")
            .build();

        assert_ledger_invariants(&ledger);
        assert_share(&ledger, "Sara", Money::new(dec!(12.50)));
    }

    #[test]
    #[should_panic(expected = "is not a participant")]
    fn test_share_of_missing_participant() {
        assert_share(&LedgerBuilder::new().build(), "Nobody", Money::zero());
    }
}
