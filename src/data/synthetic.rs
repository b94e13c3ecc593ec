use {
    chrono::Local,
    rand::{Rng, SeedableRng, rngs::StdRng},
};

use crate::{
    config::{DEMO, FeedConfig},
    domain::Bar,
    models::{TradeDirection, TradeSuggestion},
    utils::now_timestamp_ms,
};

/// RNG for the whole session. Seeded for reproducible replays, OS-seeded
/// otherwise.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Timestamp of the first bar: today at the configured pre-market hour, local
/// time.
fn anchor_timestamp_ms(cfg: &FeedConfig) -> i64 {
    let today = Local::now().date_naive();
    today
        .and_hms_opt(cfg.anchor_hour, 0, 0)
        .and_then(|naive| naive.and_local_timezone(Local).single())
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(now_timestamp_ms)
}

/// Build the session's fixed bar series: a random walk of `bar_count`
/// one-interval bars with constant wick offsets and volume.
///
/// Called exactly once per session. Replay data must hold still afterwards,
/// otherwise stepping through it is meaningless.
pub fn generate_bars(rng: &mut StdRng, count: usize) -> Vec<Bar> {
    let cfg = &DEMO.feed;
    let start_ts = anchor_timestamp_ms(cfg);

    let mut bars = Vec::with_capacity(count);
    let mut price = cfg.start_price;

    for i in 0..count {
        price += rng.gen_range(-1.0..1.0) * cfg.step_scale;
        let ts = start_ts + i as i64 * cfg.interval_ms;
        bars.push(Bar::new(
            ts,
            price,
            price + cfg.wick_offset,
            price - cfg.wick_offset,
            price,
            cfg.volume,
        ));
    }
    bars
}

/// Roll a fresh trade idea: uniform R:R in the configured range (2 decimal
/// places, as displayed) and a coin-flip direction.
pub fn random_suggestion(rng: &mut StdRng) -> TradeSuggestion {
    let cfg = &DEMO.suggestion;
    let rr = rng.gen_range(cfg.rr_min..=cfg.rr_max);
    let direction = if rng.gen_bool(0.5) {
        TradeDirection::Long
    } else {
        TradeDirection::Short
    };
    TradeSuggestion {
        direction,
        risk_reward: (rr * 100.0).round() / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_has_requested_length_and_ordered_timestamps() {
        let mut rng = session_rng(Some(7));
        let bars = generate_bars(&mut rng, DEMO.feed.bar_count);
        assert_eq!(bars.len(), DEMO.feed.bar_count);
        for pair in bars.windows(2) {
            assert_eq!(pair[1].timestamp_ms - pair[0].timestamp_ms, DEMO.feed.interval_ms);
        }
    }

    #[test]
    fn bars_keep_high_above_low() {
        let mut rng = session_rng(Some(7));
        for bar in generate_bars(&mut rng, 100) {
            assert!(bar.high > bar.low);
            assert!(bar.open <= bar.high && bar.open >= bar.low);
        }
    }

    #[test]
    fn seeded_series_is_reproducible() {
        let mut a = session_rng(Some(42));
        let mut b = session_rng(Some(42));
        let left = generate_bars(&mut a, 50);
        let right = generate_bars(&mut b, 50);
        for (l, r) in left.iter().zip(&right) {
            assert_eq!(l.close, r.close);
        }
    }

    #[test]
    fn suggestions_stay_in_configured_range() {
        let mut rng = session_rng(Some(1));
        for _ in 0..200 {
            let s = random_suggestion(&mut rng);
            assert!(s.risk_reward >= DEMO.suggestion.rr_min);
            assert!(s.risk_reward <= DEMO.suggestion.rr_max);
        }
    }
}
