use crate::types::{Signal, Timeframe, Volatility};

/// Criteria for narrowing the active signal view.
///
/// `None` on either enum field means "all". Built per request from query
/// parameters; never stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterCriteria {
    pub timeframe: Option<Timeframe>,
    pub volatility: Option<Volatility>,
    /// Minimum confidence percentage (0-100).
    pub min_confidence: u8,
}

impl FilterCriteria {
    /// Check whether a signal passes all three predicates.
    pub fn matches(&self, signal: &Signal) -> bool {
        if let Some(timeframe) = self.timeframe {
            if signal.timeframe != timeframe {
                return false;
            }
        }
        if let Some(volatility) = self.volatility {
            if signal.volatility != volatility {
                return false;
            }
        }
        signal.confidence >= self.min_confidence
    }
}
