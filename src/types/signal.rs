use serde::{Deserialize, Serialize};

/// Currency pairs tracked by the signal feed.
pub const CURRENCY_PAIRS: [&str; 6] = [
    "EUR/USD", "GBP/USD", "USD/JPY", "AUD/USD", "USD/CAD", "NZD/USD",
];

/// Direction of a trading signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Buy,
    Sell,
}

/// Market volatility attached to a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Volatility {
    Low,
    Medium,
    High,
}

impl Volatility {
    /// Parse from string. Returns None for "all" or anything unrecognized.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Chart timeframe a signal was generated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "4h")]
    FourHours,
}

impl Timeframe {
    /// Parse from string. Returns None for "all" or anything unrecognized.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "1m" => Some(Self::OneMinute),
            "5m" => Some(Self::FiveMinutes),
            "15m" => Some(Self::FifteenMinutes),
            "1h" => Some(Self::OneHour),
            "4h" => Some(Self::FourHours),
            _ => None,
        }
    }
}

/// Lifecycle status of a signal.
///
/// `Active` only appears in the live collection; `Win`/`Loss` only in
/// history. There is no automatic active-to-resolved transition - resolved
/// entries arrive pre-resolved from the seed or remote source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStatus {
    Active,
    Win,
    Loss,
}

/// A single trading recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    /// Unique ID within its owning collection.
    pub id: String,
    /// Currency pair, one of [`CURRENCY_PAIRS`].
    pub pair: String,
    /// Buy or sell.
    #[serde(rename = "type")]
    pub direction: Direction,
    /// Confidence percentage (0-100).
    pub confidence: u8,
    pub volatility: Volatility,
    pub timeframe: Timeframe,
    /// Entry price.
    pub price: f64,
    /// Observation time as a display string (e.g. "10:34"), never parsed.
    pub timestamp: String,
    /// Target price, if the generator produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SignalStatus>,
    /// Percent move since previous close, reported by the quote feed.
    #[serde(
        default,
        rename = "change_percent",
        skip_serializing_if = "Option::is_none"
    )]
    pub change_percent: Option<f64>,
    /// Short explanation from the chart analyzer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}
