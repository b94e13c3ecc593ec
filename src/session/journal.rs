// src/session/journal.rs

use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

use crate::models::Trade;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum JournalKind {
    #[strum(to_string = "Manual Trades")]
    Manual,
    #[strum(to_string = "Automated Trades")]
    Automated,
}

/// A named ordered list of recorded trades. Append-only except for the
/// explicit confirm-delete path on `ReplaySession`.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    trades: Vec<Trade>,
}

impl Journal {
    pub fn append(&mut self, trade: Trade) {
        self.trades.push(trade);
    }

    /// Remove the trade at `index`, shifting the tail down by one.
    /// Callers validate the index first; see `ReplaySession::confirm_delete`.
    pub(crate) fn remove(&mut self, index: usize) -> Trade {
        self.trades.remove(index)
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }
}

/// The single outstanding delete request awaiting confirmation.
/// Process-wide there is at most one; a newer request overwrites it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDeletion {
    pub journal: JournalKind,
    pub index: usize,
}
