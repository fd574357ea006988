//! Receipt ledger implementation
//!
//! This module holds the items of one bill, the people sharing it, who is
//! paying for which item, and the stated totals. Every edit is synchronous
//! and total: an edit that cannot apply leaves the ledger untouched and
//! reports why through [`SplitError`].

use std::collections::BTreeMap;

use core_kernel::{ItemId, Money};
use tracing::{debug, warn};

use crate::error::SplitError;
use crate::item::{Item, ItemUpdate, PLACEHOLDER_ITEM_NAME};
use crate::participant::ParticipantName;
use crate::seed::SeedReceipt;
use crate::snapshot::{LedgerSnapshot, SnapshotLine};
use crate::summary::{ParticipantShare, SplitSummary};
use crate::totals::{BillTotals, TotalsPatch};

/// Settings applied when a ledger is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerOptions {
    /// People present before anyone is added by hand
    pub default_participants: Vec<String>,
    /// Name given to items added by hand
    pub placeholder_item_name: String,
}

impl Default for LedgerOptions {
    fn default() -> Self {
        Self {
            default_participants: Vec::new(),
            placeholder_item_name: PLACEHOLDER_ITEM_NAME.to_string(),
        }
    }
}

impl LedgerOptions {
    /// Sets the default participants
    pub fn with_default_participants<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_participants = names.into_iter().map(Into::into).collect();
        self
    }
}

/// The bill split ledger
///
/// # Invariants
///
/// - Every assignment key is the id of an existing item
/// - Every assignment value is a current participant
/// - Item ids are unique and never reused, even after removal
/// - Participant names are unique, trimmed and non-empty
#[derive(Debug, Clone)]
pub struct Ledger {
    /// Items in display order
    items: Vec<Item>,
    /// Participants in insertion order
    participants: Vec<ParticipantName>,
    /// Item to participant mapping
    assignments: BTreeMap<ItemId, ParticipantName>,
    /// Stated totals
    totals: BillTotals,
    /// Highest numeric id ever handed out
    id_high_water: u64,
    placeholder_item_name: String,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self::with_options(&LedgerOptions::default())
    }

    /// Creates an empty ledger with the given options
    ///
    /// Blank or repeated default participant names are skipped.
    pub fn with_options(options: &LedgerOptions) -> Self {
        let mut ledger = Self {
            items: Vec::new(),
            participants: Vec::new(),
            assignments: BTreeMap::new(),
            totals: BillTotals::default(),
            id_high_water: 0,
            placeholder_item_name: options.placeholder_item_name.clone(),
        };

        for name in &options.default_participants {
            if let Err(e) = ledger.add_participant(name) {
                debug!(participant = %name, error = %e, "Skipping default participant");
            }
        }

        ledger
    }

    /// Seeds a ledger from a recognised receipt
    ///
    /// Items are numbered `1`, `2`, ... in receipt order. No item starts out
    /// assigned.
    pub fn seed(seed: SeedReceipt) -> Self {
        Self::seed_with(seed, &LedgerOptions::default())
    }

    /// Seeds a ledger from a recognised receipt with the given options
    pub fn seed_with(seed: SeedReceipt, options: &LedgerOptions) -> Self {
        let mut ledger = Self::with_options(options);
        ledger.totals = seed.totals();

        for (position, line) in (1u64..).zip(seed.items) {
            ledger.items.push(Item::new(position, line.name, line.price));
            ledger.id_high_water = position;
        }

        ledger
    }

    /// Seeds a ledger from the raw recognition payload
    ///
    /// An absent or malformed payload yields an empty ledger, so the items can
    /// still be entered by hand.
    pub fn from_payload(payload: Option<&str>, options: &LedgerOptions) -> Self {
        let Some(payload) = payload.filter(|p| !p.trim().is_empty()) else {
            return Self::with_options(options);
        };

        match SeedReceipt::from_json_str(payload) {
            Ok(seed) => Self::seed_with(seed, options),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable recognition payload");
                Self::with_options(options)
            }
        }
    }

    /// Returns the items in display order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Gets an item by id
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Returns the participants in insertion order
    pub fn participants(&self) -> &[ParticipantName] {
        &self.participants
    }

    /// Returns true if `name` is a current participant
    pub fn has_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p == name)
    }

    /// Returns who an item is assigned to
    pub fn assignee(&self, id: &ItemId) -> Option<&ParticipantName> {
        self.assignments.get(id)
    }

    /// Returns the item to participant mapping
    pub fn assignments(&self) -> &BTreeMap<ItemId, ParticipantName> {
        &self.assignments
    }

    /// Returns the stated totals
    pub fn totals(&self) -> &BillTotals {
        &self.totals
    }

    /// Sum of every item price, assigned or not
    pub fn items_sum(&self) -> Money {
        self.items.iter().map(|i| i.price).sum()
    }

    /// Returns the id the next added item will get
    ///
    /// One more than the largest numeric id present or ever handed out, so
    /// ids stay unique even when a seed carries non-numeric ids.
    pub fn next_item_id(&self) -> ItemId {
        let max_present = self
            .items
            .iter()
            .filter_map(|i| i.id.numeric())
            .max()
            .unwrap_or(0);

        ItemId::from(max_present.max(self.id_high_water) + 1)
    }

    /// Adds a zero-priced placeholder item
    pub fn add_item(&mut self) -> &Item {
        let id = self.next_item_id();
        if let Some(n) = id.numeric() {
            self.id_high_water = n;
        }

        let position = self.items.len();
        self.items.push(Item::new(id, self.placeholder_item_name.clone(), Money::zero()));
        &self.items[position]
    }

    /// Renames an item
    ///
    /// # Errors
    ///
    /// Returns `SplitError::ItemNotFound` if no item has this id
    pub fn rename_item(&mut self, id: &ItemId, name: impl Into<String>) -> Result<&Item, SplitError> {
        self.update_item(id, ItemUpdate::rename(name))
    }

    /// Changes the price of an item; negative prices become zero
    ///
    /// # Errors
    ///
    /// Returns `SplitError::ItemNotFound` if no item has this id
    pub fn reprice_item(&mut self, id: &ItemId, price: Money) -> Result<&Item, SplitError> {
        self.update_item(id, ItemUpdate::reprice(price))
    }

    /// Applies a partial update to an item
    ///
    /// # Errors
    ///
    /// Returns `SplitError::ItemNotFound` if no item has this id
    pub fn update_item(&mut self, id: &ItemId, update: ItemUpdate) -> Result<&Item, SplitError> {
        let Some(item) = self.items.iter_mut().find(|i| &i.id == id) else {
            debug!(item_id = %id, "Ignoring update of unknown item");
            return Err(SplitError::ItemNotFound(id.to_string()));
        };

        item.apply(update);
        Ok(&*item)
    }

    /// Removes an item and any assignment it had
    ///
    /// The id is not handed out again.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::ItemNotFound` if no item has this id
    pub fn remove_item(&mut self, id: &ItemId) -> Result<Item, SplitError> {
        let Some(position) = self.items.iter().position(|i| &i.id == id) else {
            debug!(item_id = %id, "Ignoring removal of unknown item");
            return Err(SplitError::ItemNotFound(id.to_string()));
        };

        if let Some(n) = id.numeric() {
            self.id_high_water = self.id_high_water.max(n);
        }
        self.assignments.remove(id);
        Ok(self.items.remove(position))
    }

    /// Adds a participant
    ///
    /// # Errors
    ///
    /// - `SplitError::EmptyParticipantName` if the trimmed name is empty
    /// - `SplitError::DuplicateParticipant` if the name is already present
    pub fn add_participant(&mut self, raw_name: &str) -> Result<&ParticipantName, SplitError> {
        let name = ParticipantName::parse(raw_name)?;

        if self.participants.contains(&name) {
            debug!(participant = %name, "Ignoring duplicate participant");
            return Err(SplitError::DuplicateParticipant(name.into()));
        }

        self.participants.push(name);
        let position = self.participants.len() - 1;
        Ok(&self.participants[position])
    }

    /// Removes a participant, unassigning every item they had
    ///
    /// Returns false if nobody by that name was present.
    pub fn remove_participant(&mut self, raw_name: &str) -> bool {
        let name = raw_name.trim();
        let before = self.participants.len();
        self.participants.retain(|p| p.as_str() != name);

        if self.participants.len() == before {
            return false;
        }

        self.assignments.retain(|_, assignee| assignee.as_str() != name);
        true
    }

    /// Assigns an item to a participant
    ///
    /// A blank participant clears the assignment. Assigning the same
    /// participant again changes nothing.
    ///
    /// # Errors
    ///
    /// - `SplitError::ItemNotFound` if no item has this id
    /// - `SplitError::UnknownParticipant` if the name is not a current participant
    pub fn assign(&mut self, item_id: &ItemId, participant: &str) -> Result<(), SplitError> {
        if self.item(item_id).is_none() {
            debug!(item_id = %item_id, "Ignoring assignment of unknown item");
            return Err(SplitError::ItemNotFound(item_id.to_string()));
        }

        let name = match ParticipantName::parse(participant) {
            Ok(name) => name,
            Err(SplitError::EmptyParticipantName) => {
                self.assignments.remove(item_id);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if !self.participants.contains(&name) {
            debug!(item_id = %item_id, participant = %name, "Ignoring assignment to unknown participant");
            return Err(SplitError::UnknownParticipant(name.into()));
        }

        self.assignments.insert(item_id.clone(), name);
        Ok(())
    }

    /// Clears the assignment of an item, returning who had it
    pub fn unassign(&mut self, item_id: &ItemId) -> Option<ParticipantName> {
        self.assignments.remove(item_id)
    }

    /// Computes what each participant owes
    ///
    /// Every current participant appears, in insertion order, with zero if
    /// nothing is assigned to them. Unassigned items count for nobody.
    pub fn compute_totals(&self) -> Vec<ParticipantShare> {
        self.participants
            .iter()
            .map(|participant| {
                let (amount, item_count) = self
                    .items
                    .iter()
                    .filter(|item| self.assignments.get(&item.id) == Some(participant))
                    .fold((Money::zero(), 0), |(sum, count), item| (sum + item.price, count + 1));

                ParticipantShare {
                    participant: participant.clone(),
                    amount,
                    item_count,
                }
            })
            .collect()
    }

    /// Returns what one participant owes, if they are a participant
    pub fn share_of(&self, participant: &str) -> Option<Money> {
        self.compute_totals()
            .into_iter()
            .find(|s| s.participant == participant)
            .map(|s| s.amount)
    }

    /// Applies edits to the stated totals
    ///
    /// Fields are independent: changing the subtotal does not touch the total.
    pub fn set_totals(&mut self, patch: TotalsPatch) {
        self.totals.apply(patch);
    }

    /// Computes the split and reconciles it against the stated total
    pub fn summary(&self) -> SplitSummary {
        SplitSummary::reconcile(self.compute_totals(), &self.totals)
    }

    /// Takes a read-only snapshot for exporters
    pub fn snapshot(&self) -> LedgerSnapshot {
        let lines = self
            .items
            .iter()
            .map(|item| SnapshotLine {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                assignee: self.assignments.get(&item.id).cloned(),
            })
            .collect();

        LedgerSnapshot {
            lines,
            participants: self.participants.clone(),
            totals: self.totals,
            summary: self.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedItem;
    use rust_decimal_macros::dec;

    fn pizza_ledger() -> Ledger {
        let seed = SeedReceipt::new(
            vec![
                SeedItem::new("Margherita Pizza", Money::new(dec!(18.99))),
                SeedItem::new("Caesar Salad", Money::new(dec!(12.50))),
            ],
            Money::new(dec!(31.49)),
            Money::new(dec!(2.83)),
            Money::new(dec!(34.32)),
        );
        Ledger::seed(seed)
    }

    #[test]
    fn test_seed_numbers_items() {
        let ledger = pizza_ledger();
        let ids: Vec<_> = ledger.items().iter().map(|i| i.id.as_str()).collect();

        assert_eq!(ids, vec!["1", "2"]);
        assert!(ledger.assignments().is_empty());
        assert!(ledger.participants().is_empty());
    }

    #[test]
    fn test_add_item_uses_next_number() {
        let mut ledger = pizza_ledger();
        let item = ledger.add_item();

        assert_eq!(item.id.as_str(), "3");
        assert_eq!(item.name, PLACEHOLDER_ITEM_NAME);
        assert!(item.price.is_zero());
    }

    #[test]
    fn test_removed_ids_are_not_reused() {
        let mut ledger = pizza_ledger();
        ledger.remove_item(&ItemId::from(2u64)).unwrap();

        assert_eq!(ledger.add_item().id.as_str(), "3");
    }

    #[test]
    fn test_scenario_split() {
        let mut ledger = pizza_ledger();
        ledger.add_participant("Ali").unwrap();
        ledger.add_participant("Sara").unwrap();
        ledger.assign(&ItemId::from(1u64), "Ali").unwrap();
        ledger.assign(&ItemId::from(2u64), "Sara").unwrap();

        let summary = ledger.summary();
        assert_eq!(summary.share_of("Ali"), Some(Money::new(dec!(18.99))));
        assert_eq!(summary.share_of("Sara"), Some(Money::new(dec!(12.50))));
        assert_eq!(summary.assigned.amount(), dec!(31.49));
        assert_eq!(summary.unassigned.amount(), dec!(2.83));
    }

    #[test]
    fn test_blank_assignment_clears() {
        let mut ledger = pizza_ledger();
        ledger.add_participant("Ali").unwrap();
        ledger.assign(&ItemId::from(1u64), "Ali").unwrap();

        ledger.assign(&ItemId::from(1u64), "  ").unwrap();
        assert!(ledger.assignee(&ItemId::from(1u64)).is_none());
    }

    #[test]
    fn test_default_participants() {
        let options = LedgerOptions::default().with_default_participants(["Ali", "Sara", "Ali", " "]);
        let ledger = Ledger::with_options(&options);

        assert_eq!(ledger.participants(), &["Ali", "Sara"]);
    }

    #[test]
    fn test_from_payload_fails_open() {
        let options = LedgerOptions::default();

        assert!(Ledger::from_payload(None, &options).items().is_empty());
        assert!(Ledger::from_payload(Some("{broken"), &options).items().is_empty());
        assert_eq!(
            Ledger::from_payload(Some(r#"{"items":[{"name":"Tea","price":2}]}"#), &options)
                .items()
                .len(),
            1
        );
    }
}
