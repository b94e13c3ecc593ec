// src/session/cursor.rs

/// Index into the session's bar series during manual replay.
///
/// The index always stays inside `[0, len - 1]`; stepping past either end is
/// a silent no-op rather than an error or a wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayCursor {
    index: usize,
    len: usize,
}

impl ReplayCursor {
    /// `len` must be > 0; `ReplaySession::new` enforces that before we get here.
    pub(crate) fn new(len: usize) -> Self {
        debug_assert!(len > 0, "replay cursor over an empty series");
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn series_len(&self) -> usize {
        self.len
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self) -> bool {
        self.index + 1 >= self.len
    }

    /// Step forward one bar, clamped at the last bar.
    pub fn advance(&mut self) {
        if !self.at_end() {
            self.index += 1;
        }
    }

    /// Step back one bar, clamped at the first bar.
    pub fn retreat(&mut self) {
        if !self.at_start() {
            self.index -= 1;
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let cursor = ReplayCursor::new(300);
        assert_eq!(cursor.index(), 0);
        assert!(cursor.at_start());
    }

    #[test]
    fn retreat_at_start_is_noop() {
        let mut cursor = ReplayCursor::new(10);
        cursor.retreat();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn advance_at_end_is_noop() {
        let mut cursor = ReplayCursor::new(3);
        for _ in 0..10 {
            cursor.advance();
        }
        assert_eq!(cursor.index(), 2);
        assert!(cursor.at_end());
    }

    #[test]
    fn single_bar_series_is_both_ends() {
        let mut cursor = ReplayCursor::new(1);
        assert!(cursor.at_start() && cursor.at_end());
        cursor.advance();
        cursor.retreat();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut cursor = ReplayCursor::new(50);
        for _ in 0..7 {
            cursor.advance();
        }
        assert_eq!(cursor.index(), 7);
        cursor.reset();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn stays_in_bounds_for_arbitrary_sequences() {
        let mut cursor = ReplayCursor::new(5);
        // Mixed walk hammering both boundaries.
        let steps = [1, 1, 1, 1, 1, 1, 1, -1, -1, -1, -1, -1, -1, -1, -1, 1];
        for step in steps {
            if step > 0 {
                cursor.advance();
            } else {
                cursor.retreat();
            }
            assert!(cursor.index() < cursor.series_len());
        }
    }
}
