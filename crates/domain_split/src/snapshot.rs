//! Read-only view of a ledger for export

use core_kernel::{ItemId, Money};
use serde::{Deserialize, Serialize};

use crate::participant::ParticipantName;
use crate::summary::SplitSummary;
use crate::totals::BillTotals;

/// An item together with whoever it is assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotLine {
    pub id: ItemId,
    pub name: String,
    pub price: Money,
    pub assignee: Option<ParticipantName>,
}

/// Everything an exporter needs to render the bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub lines: Vec<SnapshotLine>,
    pub participants: Vec<ParticipantName>,
    pub totals: BillTotals,
    pub summary: SplitSummary,
}

impl LedgerSnapshot {
    /// Lines nobody has been assigned
    pub fn unassigned_lines(&self) -> impl Iterator<Item = &SnapshotLine> {
        self.lines.iter().filter(|l| l.assignee.is_none())
    }
}
