//! Bill Split Domain - Receipt Ledger
//!
//! This crate keeps the state of one shared bill: the items on the receipt,
//! the people splitting it, who pays for which item, and the stated
//! subtotal/tax/total. Per-person amounts are derived on demand.
//!
//! # Rules
//!
//! - An item is assigned to at most one participant
//! - Removing a participant unassigns their items
//! - Stated totals are edited by hand and never recomputed from prices
//! - Edits that cannot apply are ignored and leave the ledger unchanged
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{ItemId, Money};
//! use domain_split::{Ledger, SeedItem, SeedReceipt};
//! use rust_decimal_macros::dec;
//!
//! let seed = SeedReceipt::new(
//!     vec![SeedItem::new("Margherita Pizza", Money::new(dec!(18.99)))],
//!     Money::new(dec!(18.99)),
//!     Money::new(dec!(1.71)),
//!     Money::new(dec!(20.70)),
//! );
//! let mut ledger = Ledger::seed(seed);
//!
//! ledger.add_participant("Ali").unwrap();
//! ledger.assign(&ItemId::from(1u64), "Ali").unwrap();
//!
//! assert_eq!(ledger.share_of("Ali"), Some(Money::new(dec!(18.99))));
//! ```

pub mod ledger;
pub mod item;
pub mod participant;
pub mod totals;
pub mod seed;
pub mod summary;
pub mod snapshot;
pub mod error;

pub use ledger::{Ledger, LedgerOptions};
pub use item::{Item, ItemUpdate, PLACEHOLDER_ITEM_NAME};
pub use participant::ParticipantName;
pub use totals::{BillTotals, TotalsPatch};
pub use seed::{SeedItem, SeedReceipt};
pub use summary::{ParticipantShare, ReconciliationNote, SplitSummary};
pub use snapshot::{LedgerSnapshot, SnapshotLine};
pub use error::SplitError;
