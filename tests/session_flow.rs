//! End-to-end session scenarios: the full replay/journal flows a user drives
//! through the dashboard, exercised straight against the state core.

use replay_desk::data::{generate_bars, random_suggestion, session_rng};
use replay_desk::models::{Trade, TradeDirection};
use replay_desk::session::{JournalKind, ReplaySession};

fn fresh_session(bars: usize) -> ReplaySession {
    let mut rng = session_rng(Some(99));
    let series = generate_bars(&mut rng, bars);
    let suggestion = random_suggestion(&mut rng);
    ReplaySession::new(series, suggestion).expect("non-empty series")
}

fn trade(note: &str) -> Trade {
    Trade::new(0, "AAPL", TradeDirection::Long, 100.0, 1.0, note)
}

// ---------------------------------------------------------------------------
// Replay navigation
// ---------------------------------------------------------------------------

#[test]
fn forward_five_back_ten_clamps_at_zero() {
    let mut session = fresh_session(300);
    for _ in 0..5 {
        session.advance();
    }
    assert_eq!(session.cursor().index(), 5);

    for _ in 0..10 {
        session.retreat();
    }
    assert_eq!(session.cursor().index(), 0);
}

#[test]
fn cursor_never_leaves_the_series() {
    let mut session = fresh_session(4);
    for _ in 0..100 {
        session.advance();
        assert!(session.cursor().index() < session.bars().len());
    }
    assert_eq!(session.cursor().index(), 3);
    for _ in 0..100 {
        session.retreat();
    }
    assert_eq!(session.cursor().index(), 0);
}

#[test]
fn reset_from_anywhere_lands_on_bar_zero() {
    let mut session = fresh_session(300);
    for _ in 0..237 {
        session.advance();
    }
    session.reset();
    assert_eq!(session.cursor().index(), 0);
    assert_eq!(
        session.current_bar().timestamp_ms,
        session.bars()[0].timestamp_ms
    );
}

// ---------------------------------------------------------------------------
// Journal deletion flow
// ---------------------------------------------------------------------------

#[test]
fn delete_middle_row_shifts_the_tail() {
    let mut session = fresh_session(10);
    for note in ["first", "second", "third"] {
        session.append_trade(JournalKind::Manual, trade(note));
    }

    session.request_delete(JournalKind::Manual, 1);
    session.confirm_delete();

    let journal = session.journal(JournalKind::Manual);
    assert_eq!(journal.len(), 2);
    assert_eq!(journal.trades()[1].note, "third");
}

#[test]
fn cancel_then_confirm_deletes_nothing() {
    let mut session = fresh_session(10);
    session.append_trade(JournalKind::Automated, trade("keep me"));

    session.request_delete(JournalKind::Automated, 0);
    session.cancel_delete();
    // The confirm that follows has nothing armed.
    session.confirm_delete();

    assert_eq!(session.journal(JournalKind::Automated).len(), 1);
}

#[test]
fn second_request_wins_across_journals() {
    let mut session = fresh_session(10);
    session.append_trade(JournalKind::Manual, trade("manual row"));
    session.append_trade(JournalKind::Automated, trade("auto row"));

    session.request_delete(JournalKind::Manual, 0);
    session.request_delete(JournalKind::Automated, 0);
    session.confirm_delete();

    assert_eq!(session.journal(JournalKind::Manual).len(), 1);
    assert!(session.journal(JournalKind::Automated).is_empty());
    assert!(session.pending_delete().is_none());
}

// ---------------------------------------------------------------------------
// Mixed flow: replay position feeding the journal
// ---------------------------------------------------------------------------

#[test]
fn marked_position_survives_stepping_and_closes_into_journal() {
    let mut session = fresh_session(50);
    session.mark_position(TradeDirection::Long);

    for _ in 0..12 {
        session.advance();
    }
    assert!(session.position().is_some());

    session.close_position(1_700_000_000_000, "MSFT");
    let journal = session.journal(JournalKind::Manual);
    assert_eq!(journal.len(), 1);
    assert_eq!(journal.trades()[0].direction, TradeDirection::Long);

    // And the recorded row can go through the delete flow like any other.
    session.request_delete(JournalKind::Manual, 0);
    session.confirm_delete();
    assert!(session.journal(JournalKind::Manual).is_empty());
}

#[test]
fn reset_mid_position_drops_the_marker_but_not_the_journal() {
    let mut session = fresh_session(50);
    session.append_trade(JournalKind::Manual, trade("recorded earlier"));
    session.mark_position(TradeDirection::Short);
    session.advance();

    session.reset();

    assert!(session.position().is_none());
    assert_eq!(session.journal(JournalKind::Manual).len(), 1);
}
