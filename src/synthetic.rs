//! Placeholder trades for the no-data-at-all floor.
//!
//! When neither a fresh parse nor a stale snapshot exists, the consumer
//! still needs a usable table. Synthetic records are deterministic in shape
//! (descending ids, 5-minute spaced timestamps) with pseudo-random values in
//! the plausible band of the real market, and are always tagged with mock
//! provenance, never mixed with real records.

use chrono::NaiveTime;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::sync::Mutex;

use crate::trade::{Side, Trade};

const STRATEGIES: [&str; 8] = [
    "MOMENTUM",
    "ARBITRAGE",
    "VWAP",
    "LEAD_LAG",
    "SENTIMENT",
    "ORDER_BOOK",
    "SHARP_MONEY",
    "VOLATILITY",
];

/// Contract prices live on the 0..1 band; entries cluster mid-band.
const ENTRY_BAND: std::ops::Range<f64> = 0.40..0.60;
const MAX_MOVE: f64 = 0.16;

/// Newest synthetic trade is stamped here; earlier ones step back 5 minutes.
const BASE_TIME: (u32, u32, u32) = (16, 45, 23);

pub struct FallbackSynthesizer {
    rng: Mutex<StdRng>,
}

impl FallbackSynthesizer {
    /// OS-entropy generator for production use.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Seeded generator so tests get reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Produces `count` trades with ids descending from `count` to 1.
    pub fn synthesize(&self, count: u32) -> Vec<Trade> {
        let mut rng = self.rng.lock().expect("rng lock poisoned");
        (0..count)
            .map(|offset| {
                let id = count - offset;
                let side = if rng.random_bool(0.5) {
                    Side::Buy
                } else {
                    Side::Sell
                };
                let entry: f64 = rng.random_range(ENTRY_BAND);
                let movement: f64 = rng.random_range(-MAX_MOVE..MAX_MOVE);
                let exit = (entry + movement).clamp(0.01, 0.99);
                let pnl = match side {
                    Side::Buy => exit - entry,
                    Side::Sell => entry - exit,
                };
                let market = match side {
                    Side::Buy => "BTC-UP-5M",
                    Side::Sell => "BTC-DOWN-5M",
                };
                let strategy = STRATEGIES[rng.random_range(0..STRATEGIES.len())];

                Trade::new(
                    id,
                    timestamp(offset),
                    strategy.to_string(),
                    market.to_string(),
                    side,
                    round2(entry),
                    round2(exit),
                    round2(pnl),
                )
            })
            .collect()
    }
}

impl Default for FallbackSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

fn timestamp(offset: u32) -> String {
    let (h, m, s) = BASE_TIME;
    let base = NaiveTime::from_hms_opt(h, m, s).expect("valid base time");
    let t = base - chrono::TimeDelta::minutes(5 * offset as i64);
    t.format("%H:%M:%S").to_string()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trade::TradeStatus;

    #[test]
    fn ids_descend_from_count_to_one() {
        let trades = FallbackSynthesizer::with_seed(7).synthesize(5);
        assert_eq!(trades.iter().map(|t| t.id).collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
    }

    #[test]
    fn seeded_output_is_reproducible() {
        let a = FallbackSynthesizer::with_seed(42).synthesize(10);
        let b = FallbackSynthesizer::with_seed(42).synthesize(10);
        assert_eq!(a, b);
    }

    #[test]
    fn values_stay_in_plausible_bands() {
        let trades = FallbackSynthesizer::with_seed(1).synthesize(50);
        for t in &trades {
            // Inclusive upper bound: display rounding can land exactly on 0.60
            assert!((0.40..=0.60).contains(&t.entry), "entry {} out of band", t.entry);
            assert!((0.01..=0.99).contains(&t.exit), "exit {} out of band", t.exit);
            assert!(t.pnl.abs() <= MAX_MOVE + 0.01, "pnl {} out of band", t.pnl);
        }
    }

    #[test]
    fn status_follows_pnl_like_real_records() {
        let trades = FallbackSynthesizer::with_seed(3).synthesize(50);
        for t in &trades {
            assert_eq!(t.status, TradeStatus::from_pnl(t.pnl));
        }
    }

    #[test]
    fn timestamps_step_back_five_minutes() {
        let trades = FallbackSynthesizer::with_seed(0).synthesize(3);
        assert_eq!(trades[0].time, "16:45:23");
        assert_eq!(trades[1].time, "16:40:23");
        assert_eq!(trades[2].time, "16:35:23");
    }
}
