use serde::{Deserialize, Serialize};

/// Share of signals belonging to one currency pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairShare {
    pub pair: String,
    /// Occurrences across active and history combined.
    pub count: usize,
    /// Rounded percentage of all signals (0 when there are none).
    pub percentage: u8,
}

/// Aggregate view over the active and history collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    /// Rounded percentage of resolved signals that were wins (0 with no history).
    pub win_rate: u8,
    /// Rounded mean confidence of active signals (0 when none are active).
    pub avg_confidence: u8,
    pub total_signals: usize,
    pub active_count: usize,
    pub history_count: usize,
    /// Per-pair distribution over the fixed pair set.
    pub distribution: Vec<PairShare>,
    /// Unix timestamp (milliseconds) when computed.
    pub timestamp: i64,
}
