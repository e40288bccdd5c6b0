//! Aggregate statistics over the signal collections.

use crate::types::{PairShare, Signal, SignalStatus, StatsSummary, CURRENCY_PAIRS};

fn rounded_pct(numerator: usize, denominator: usize) -> u8 {
    if denominator == 0 {
        return 0;
    }
    (100.0 * numerator as f64 / denominator as f64).round() as u8
}

/// Compute win rate, mean confidence and per-pair distribution.
///
/// Every denominator is guarded: empty history yields a 0% win rate, an
/// empty active set yields 0 mean confidence, and an empty store yields an
/// all-zero distribution.
pub fn aggregate(active: &[Signal], history: &[Signal]) -> StatsSummary {
    let wins = history
        .iter()
        .filter(|s| s.status == Some(SignalStatus::Win))
        .count();
    let win_rate = rounded_pct(wins, history.len());

    let avg_confidence = if active.is_empty() {
        0
    } else {
        let sum: u32 = active.iter().map(|s| u32::from(s.confidence)).sum();
        (sum as f64 / active.len() as f64).round() as u8
    };

    let total = active.len() + history.len();
    let distribution = CURRENCY_PAIRS
        .iter()
        .map(|pair| {
            let count = active
                .iter()
                .chain(history.iter())
                .filter(|s| s.pair == *pair)
                .count();
            PairShare {
                pair: pair.to_string(),
                count,
                percentage: rounded_pct(count, total),
            }
        })
        .collect();

    StatsSummary {
        win_rate,
        avg_confidence,
        total_signals: total,
        active_count: active.len(),
        history_count: history.len(),
        distribution,
        timestamp: chrono::Utc::now().timestamp_millis(),
    }
}
