//! Per-person split and reconciliation against the stated total

use core_kernel::Money;
use serde::{Deserialize, Serialize};

use crate::participant::ParticipantName;
use crate::totals::BillTotals;

/// What one participant owes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantShare {
    pub participant: ParticipantName,
    /// Sum of the prices of items assigned to the participant
    pub amount: Money,
    /// Number of items assigned to the participant
    pub item_count: usize,
}

/// Informational note shown when assigned amounts do not add up to the
/// stated total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationNote {
    /// Stated total minus assigned amount; negative when more was assigned
    /// than the receipt states
    pub difference: Money,
    pub message: String,
}

impl ReconciliationNote {
    fn new(difference: Money) -> Self {
        let message = if difference.is_negative() {
            format!("Note: ${} over-assigned", difference.abs())
        } else {
            format!("Note: ${} unassigned", difference)
        };
        Self { difference, message }
    }
}

/// The derived split of a bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSummary {
    /// One entry per participant, in the order they joined
    pub shares: Vec<ParticipantShare>,
    /// Sum of all shares
    pub assigned: Money,
    /// The user-editable total, not a sum of item prices
    pub stated_total: Money,
    /// `stated_total - assigned`
    pub difference: Money,
    /// `max(0, difference)`
    pub unassigned: Money,
    /// Present whenever `assigned != stated_total`
    pub note: Option<ReconciliationNote>,
}

impl SplitSummary {
    /// Reconciles computed shares against the stated totals
    pub fn reconcile(shares: Vec<ParticipantShare>, totals: &BillTotals) -> Self {
        let assigned: Money = shares.iter().map(|s| s.amount).sum();
        let difference = totals.total - assigned;
        let note = (assigned != totals.total).then(|| ReconciliationNote::new(difference));

        Self {
            shares,
            assigned,
            stated_total: totals.total,
            difference,
            unassigned: difference.non_negative(),
            note,
        }
    }

    /// Returns the share of a participant, if they are part of the split
    pub fn share_of(&self, participant: &str) -> Option<Money> {
        self.shares
            .iter()
            .find(|s| s.participant == participant)
            .map(|s| s.amount)
    }

    /// Returns true if assigned amounts match the stated total
    pub fn is_reconciled(&self) -> bool {
        self.note.is_none()
    }
}
