//! Receipt line classification
//!
//! Each line is one of: a subtotal, tax or total line (by keyword), an item
//! line (`<name> <amount>` with the amount at the end), or noise. Keyword
//! lines are checked first so that "Subtotal 31.49" is never read as an item.

use std::str::FromStr;

use core_kernel::Money;
use domain_split::{SeedItem, SeedReceipt};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

static SUBTOTAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bsub[\s-]?total\b").expect("valid subtotal regex"));
static TOTAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\btotal\b").expect("valid total regex"));
static TAX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\btax\b").expect("valid tax regex"));
static ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s+\$?(\d+\.\d{2})$").expect("valid item regex"));
static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.\d{2}").expect("valid amount regex"));

/// What a receipt line carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Item { name: String, price: Money },
    Subtotal(Money),
    Tax(Money),
    Total(Money),
    /// Headers, addresses, blank lines and anything else
    Other,
}

/// Classifies a single recognised line
pub fn classify_line(line: &str) -> LineKind {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Other;
    }

    if SUBTOTAL_RE.is_match(line) {
        return LineKind::Subtotal(last_amount(line));
    }
    if TOTAL_RE.is_match(line) {
        return LineKind::Total(last_amount(line));
    }
    if TAX_RE.is_match(line) {
        return LineKind::Tax(last_amount(line));
    }

    match ITEM_RE.captures(line) {
        Some(caps) => {
            let name = caps[1].trim().to_string();
            let price = parse_amount(&caps[2]);
            LineKind::Item { name, price }
        }
        None => LineKind::Other,
    }
}

/// Builds seed data from recognised lines
///
/// When a keyword appears on several lines the last one wins. Totals that
/// never appear stay at zero.
pub fn parse_receipt_lines<I, S>(lines: I) -> SeedReceipt
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut receipt = SeedReceipt::default();

    for line in lines {
        match classify_line(line.as_ref()) {
            LineKind::Item { name, price } => receipt.items.push(SeedItem::new(name, price)),
            LineKind::Subtotal(amount) => receipt.subtotal = amount,
            LineKind::Tax(amount) => receipt.tax = amount,
            LineKind::Total(amount) => receipt.total = amount,
            LineKind::Other => {}
        }
    }

    debug!(items = receipt.items.len(), total = %receipt.total, "Parsed receipt lines");
    receipt
}

/// Builds seed data from recognised text, one line per text line
pub fn parse_receipt_text(text: &str) -> SeedReceipt {
    parse_receipt_lines(text.lines())
}

/// Picks the last two-decimal amount on a line, so a rate printed before
/// the amount ("Tax 8.25% 2.83") is skipped
fn last_amount(line: &str) -> Money {
    AMOUNT_RE
        .find_iter(line)
        .last()
        .map(|m| parse_amount(m.as_str()))
        .unwrap_or_default()
}

fn parse_amount(text: &str) -> Money {
    Decimal::from_str(text).map(Money::new).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_item_line() {
        assert_eq!(
            classify_line("Margherita Pizza   18.99"),
            LineKind::Item {
                name: "Margherita Pizza".to_string(),
                price: Money::new(dec!(18.99)),
            }
        );
    }

    #[test]
    fn test_item_line_with_dollar_sign() {
        assert!(matches!(
            classify_line("Coca Cola $3.50"),
            LineKind::Item { ref name, .. } if name == "Coca Cola"
        ));
    }

    #[test]
    fn test_keyword_lines_win_over_items() {
        assert_eq!(classify_line("Subtotal 31.49"), LineKind::Subtotal(Money::new(dec!(31.49))));
        assert_eq!(classify_line("SUB-TOTAL: 31.49"), LineKind::Subtotal(Money::new(dec!(31.49))));
        assert_eq!(classify_line("TOTAL 34.32"), LineKind::Total(Money::new(dec!(34.32))));
        assert_eq!(classify_line("Sales Tax 2.83"), LineKind::Tax(Money::new(dec!(2.83))));
    }

    #[test]
    fn test_keyword_without_amount_is_zero() {
        assert_eq!(classify_line("Total"), LineKind::Total(Money::zero()));
    }

    #[test]
    fn test_rate_before_amount() {
        assert_eq!(classify_line("Tax 8.25% 2.83"), LineKind::Tax(Money::new(dec!(2.83))));
    }

    #[test]
    fn test_keyword_inside_word_is_not_a_keyword() {
        assert!(matches!(classify_line("Totally Loaded Fries 5.99"), LineKind::Item { .. }));
    }

    #[test]
    fn test_noise() {
        assert_eq!(classify_line(""), LineKind::Other);
        assert_eq!(classify_line("Luigi's Trattoria"), LineKind::Other);
        assert_eq!(classify_line("Table 4 Guests 2"), LineKind::Other);
        assert_eq!(classify_line("Bread 5"), LineKind::Other);
    }
}
