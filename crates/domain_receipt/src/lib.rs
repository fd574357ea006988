//! Receipt Domain - Recognised Text to Seed Data
//!
//! The recognition service reads a receipt image and returns text. This
//! crate turns that text into the seed a split ledger starts from:
//!
//! - [`layout`] groups positioned text fragments into lines
//! - [`parser`] classifies lines into items, subtotal, tax and total
//!
//! Image decoding and character recognition happen elsewhere.

pub mod layout;
pub mod parser;

pub use layout::{group_into_lines, TextFragment};
pub use parser::{parse_receipt_lines, parse_receipt_text, LineKind, classify_line};
