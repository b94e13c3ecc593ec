// src/session/replay.rs

use anyhow::{Result, ensure};

use crate::{
    config::DF,
    domain::Bar,
    models::{Trade, TradeDirection, TradeSuggestion},
    session::{Journal, JournalKind, PendingDeletion, ReplayCursor},
};

/// Marker for an open manual position taken during replay. Display-only
/// bookkeeping; closing it records a Trade through `append_trade`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub direction: TradeDirection,
    pub entry_price: f64,
    pub entry_index: usize,
}

/// All state one user session owns: the fixed bar series, the replay cursor,
/// both trade journals, the single pending-deletion slot, the open-position
/// marker and the current suggestion.
///
/// One instance per session, constructed at startup and discarded at exit.
/// Every mutation is a synchronous method call from the UI thread; nothing
/// here is shared or global.
pub struct ReplaySession {
    bars: Vec<Bar>,
    cursor: ReplayCursor,

    manual: Journal,
    automated: Journal,
    pending_delete: Option<PendingDeletion>,

    position: Option<Position>,
    pub suggestion: TradeSuggestion,
}

impl ReplaySession {
    pub fn new(bars: Vec<Bar>, suggestion: TradeSuggestion) -> Result<Self> {
        ensure!(!bars.is_empty(), "replay session needs at least one bar");
        let cursor = ReplayCursor::new(bars.len());
        Ok(Self {
            bars,
            cursor,
            manual: Journal::default(),
            automated: Journal::default(),
            pending_delete: None,
            position: None,
            suggestion,
        })
    }

    // ---- Replay navigation -------------------------------------------------

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn cursor(&self) -> &ReplayCursor {
        &self.cursor
    }

    pub fn current_bar(&self) -> &Bar {
        // Cursor invariant keeps the index inside the series.
        &self.bars[self.cursor.index()]
    }

    pub fn advance(&mut self) {
        self.cursor.advance();
        if DF.log_replay_nav {
            log::info!("replay cursor -> {}", self.cursor.index());
        }
    }

    pub fn retreat(&mut self) {
        self.cursor.retreat();
        if DF.log_replay_nav {
            log::info!("replay cursor -> {}", self.cursor.index());
        }
    }

    /// Back to bar 0 and drop any open position marker.
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.position = None;
        if DF.log_replay_nav {
            log::info!("replay cursor reset");
        }
    }

    // ---- Position marker ---------------------------------------------------

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn mark_position(&mut self, direction: TradeDirection) {
        let bar = *self.current_bar();
        self.position = Some(Position {
            direction,
            entry_price: bar.close,
            entry_index: self.cursor.index(),
        });
    }

    /// Close the open marker into a manual journal entry. No-op without one.
    pub fn close_position(&mut self, recorded_ms: i64, symbol: &str) {
        let Some(pos) = self.position.take() else {
            return;
        };
        let exit = self.current_bar().close;
        let note = format!("entry {:.2} @ bar {}", pos.entry_price, pos.entry_index);
        let trade = Trade::new(recorded_ms, symbol, pos.direction, exit, 1.0, note);
        self.append_trade(JournalKind::Manual, trade);
    }

    // ---- Journals ----------------------------------------------------------

    pub fn journal(&self, kind: JournalKind) -> &Journal {
        match kind {
            JournalKind::Manual => &self.manual,
            JournalKind::Automated => &self.automated,
        }
    }

    fn journal_mut(&mut self, kind: JournalKind) -> &mut Journal {
        match kind {
            JournalKind::Manual => &mut self.manual,
            JournalKind::Automated => &mut self.automated,
        }
    }

    /// Entry point for trade producers (manual close, accepted suggestion,
    /// or any future order-entry collaborator).
    pub fn append_trade(&mut self, kind: JournalKind, trade: Trade) {
        if DF.log_journal {
            log::info!("append to {}: {} {}", kind, trade.direction, trade.id);
        }
        self.journal_mut(kind).append(trade);
    }

    pub fn pending_delete(&self) -> Option<PendingDeletion> {
        self.pending_delete
    }

    /// Arm the confirm step for one journal row. A second request simply
    /// replaces the first; there is no queue.
    pub fn request_delete(&mut self, journal: JournalKind, index: usize) {
        if DF.log_journal {
            log::info!("delete requested: {} #{}", journal, index);
        }
        self.pending_delete = Some(PendingDeletion { journal, index });
    }

    /// Execute the armed deletion. The stored index is re-checked against the
    /// journal's current length; if it went stale the request is dropped
    /// without touching the journal. No-op when nothing is armed.
    pub fn confirm_delete(&mut self) {
        let Some(pending) = self.pending_delete.take() else {
            return;
        };
        let journal = self.journal_mut(pending.journal);
        if pending.index >= journal.len() {
            log::warn!(
                "stale delete request for {} #{} (len {}), dropping it",
                pending.journal,
                pending.index,
                journal.len()
            );
            return;
        }
        let removed = journal.remove(pending.index);
        if DF.log_journal {
            log::info!("deleted from {}: {}", pending.journal, removed.id);
        }
    }

    /// Disarm without deleting. No-op when nothing is armed.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MS_IN_MIN;

    fn bars(n: usize) -> Vec<Bar> {
        (0..n)
            .map(|i| {
                let p = 100.0 + i as f64 * 0.1;
                Bar::new(i as i64 * MS_IN_MIN, p, p + 0.15, p - 0.15, p, 1000.0)
            })
            .collect()
    }

    fn suggestion() -> TradeSuggestion {
        TradeSuggestion {
            direction: TradeDirection::Long,
            risk_reward: 1.5,
        }
    }

    fn session(n: usize) -> ReplaySession {
        ReplaySession::new(bars(n), suggestion()).unwrap()
    }

    fn trade(tag: &str) -> Trade {
        Trade::new(0, "AAPL", TradeDirection::Long, 100.0, 1.0, tag)
    }

    #[test]
    fn empty_series_is_rejected() {
        assert!(ReplaySession::new(vec![], suggestion()).is_err());
    }

    #[test]
    fn reset_clears_position_marker() {
        let mut s = session(10);
        s.advance();
        s.mark_position(TradeDirection::Long);
        assert!(s.position().is_some());
        s.reset();
        assert!(s.position().is_none());
        assert_eq!(s.cursor().index(), 0);
    }

    #[test]
    fn close_position_records_a_manual_trade() {
        let mut s = session(10);
        s.mark_position(TradeDirection::Short);
        s.advance();
        s.advance();
        s.close_position(123, "TSLA");
        assert!(s.position().is_none());
        let journal = s.journal(JournalKind::Manual);
        assert_eq!(journal.len(), 1);
        assert_eq!(journal.trades()[0].symbol, "TSLA");
    }

    #[test]
    fn close_without_position_is_noop() {
        let mut s = session(10);
        s.close_position(0, "AAPL");
        assert!(s.journal(JournalKind::Manual).is_empty());
    }

    #[test]
    fn confirm_removes_exactly_the_requested_row() {
        let mut s = session(5);
        for tag in ["a", "b", "c"] {
            s.append_trade(JournalKind::Manual, trade(tag));
        }
        s.request_delete(JournalKind::Manual, 1);
        s.confirm_delete();

        let journal = s.journal(JournalKind::Manual);
        assert_eq!(journal.len(), 2);
        // Former index 2 shifted down to index 1.
        assert_eq!(journal.trades()[0].note, "a");
        assert_eq!(journal.trades()[1].note, "c");
        assert!(s.pending_delete().is_none());
    }

    #[test]
    fn cancel_leaves_journal_unchanged() {
        let mut s = session(5);
        s.append_trade(JournalKind::Automated, trade("x"));
        s.request_delete(JournalKind::Automated, 0);
        s.cancel_delete();
        assert_eq!(s.journal(JournalKind::Automated).len(), 1);
        assert!(s.pending_delete().is_none());
    }

    #[test]
    fn newer_request_overwrites_older() {
        let mut s = session(5);
        s.append_trade(JournalKind::Manual, trade("m"));
        s.append_trade(JournalKind::Automated, trade("a"));
        s.request_delete(JournalKind::Manual, 0);
        s.request_delete(JournalKind::Automated, 0);
        s.confirm_delete();
        // Only the second request was actionable.
        assert_eq!(s.journal(JournalKind::Manual).len(), 1);
        assert!(s.journal(JournalKind::Automated).is_empty());
    }

    #[test]
    fn confirm_with_nothing_pending_is_noop() {
        let mut s = session(5);
        s.append_trade(JournalKind::Manual, trade("m"));
        s.confirm_delete();
        s.cancel_delete();
        assert_eq!(s.journal(JournalKind::Manual).len(), 1);
    }

    #[test]
    fn stale_index_is_dropped_without_deleting() {
        let mut s = session(5);
        s.append_trade(JournalKind::Manual, trade("a"));
        s.append_trade(JournalKind::Manual, trade("b"));
        s.request_delete(JournalKind::Manual, 1);

        // Journal shrinks through another path before the confirm lands.
        s.request_delete(JournalKind::Manual, 0);
        s.confirm_delete();
        assert_eq!(s.journal(JournalKind::Manual).len(), 1);

        s.request_delete(JournalKind::Manual, 1); // now out of range
        s.confirm_delete();
        assert_eq!(s.journal(JournalKind::Manual).len(), 1);
        assert!(s.pending_delete().is_none());
    }
}
