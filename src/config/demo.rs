use crate::utils::MS_IN_MIN;

/// Shape of the synthetic session feed. One fixed series per session,
/// generated at startup and never again (replay data must hold still).
pub struct FeedConfig {
    /// Bars per session. Fixed N for the whole session.
    pub bar_count: usize,
    /// Width of one bar in milliseconds.
    pub interval_ms: i64,
    /// Local hour the series is anchored at (pre-market).
    pub anchor_hour: u32,
    /// First open price of the walk.
    pub start_price: f64,
    /// Scale of the per-bar random step.
    pub step_scale: f64,
    /// High/Low offset around the body.
    pub wick_offset: f64,
    /// Constant per-bar volume.
    pub volume: f64,
}

pub struct SuggestionConfig {
    pub rr_min: f64,
    pub rr_max: f64,
    /// Below this the suggestion card is not worth showing.
    pub rr_actionable: f64,
    /// At or above this the R:R reads as "good".
    pub rr_good: f64,
}

pub struct DemoConfig {
    pub default_symbol: &'static str,
    pub feed: FeedConfig,
    pub suggestion: SuggestionConfig,
}

pub const DEMO: DemoConfig = DemoConfig {
    default_symbol: "AAPL",
    feed: FeedConfig {
        bar_count: 300,
        interval_ms: MS_IN_MIN,
        anchor_hour: 4,
        start_price: 100.0,
        step_scale: 0.05,
        wick_offset: 0.15,
        volume: 1000.0,
    },
    suggestion: SuggestionConfig {
        rr_min: 0.5,
        rr_max: 3.0,
        rr_actionable: 1.0,
        rr_good: 2.0,
    },
};
