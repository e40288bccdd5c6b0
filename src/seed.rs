//! Seed signal sets shown before the first remote refresh.

use crate::types::{Direction, Signal, SignalStatus, Timeframe, Volatility};

#[allow(clippy::too_many_arguments)]
fn signal(
    id: &str,
    pair: &str,
    direction: Direction,
    confidence: u8,
    volatility: Volatility,
    timeframe: Timeframe,
    price: f64,
    timestamp: &str,
    target: f64,
    status: SignalStatus,
) -> Signal {
    Signal {
        id: id.to_string(),
        pair: pair.to_string(),
        direction,
        confidence,
        volatility,
        timeframe,
        price,
        timestamp: timestamp.to_string(),
        target: Some(target),
        status: Some(status),
        change_percent: None,
        reasoning: None,
    }
}

/// Initial active signals.
pub fn active_signals() -> Vec<Signal> {
    use Direction::{Buy, Sell};
    use SignalStatus::Active;
    use Timeframe::{FifteenMinutes, FiveMinutes, OneHour, OneMinute};
    use Volatility::{High, Low, Medium};

    vec![
        signal("1", "EUR/USD", Buy, 87, High, FiveMinutes, 1.0842, "10:34", 1.0865, Active),
        signal("2", "GBP/USD", Sell, 92, Medium, FifteenMinutes, 1.2654, "10:31", 1.2620, Active),
        signal("3", "USD/JPY", Buy, 78, Low, OneHour, 149.23, "10:28", 149.85, Active),
        signal("4", "AUD/USD", Sell, 84, High, FiveMinutes, 0.6534, "10:25", 0.6510, Active),
        signal("5", "USD/CAD", Buy, 71, Medium, FifteenMinutes, 1.3542, "10:22", 1.3570, Active),
        signal("6", "NZD/USD", Sell, 89, High, OneMinute, 0.5987, "10:20", 0.5960, Active),
    ]
}

/// Initial resolved signals.
pub fn history_signals() -> Vec<Signal> {
    use Direction::{Buy, Sell};
    use SignalStatus::{Loss, Win};
    use Timeframe::{FifteenMinutes, FiveMinutes, OneHour};
    use Volatility::{High, Low, Medium};

    vec![
        signal("h1", "EUR/USD", Buy, 85, Medium, FiveMinutes, 1.0820, "09:15", 1.0845, Win),
        signal("h2", "GBP/USD", Sell, 76, Low, FifteenMinutes, 1.2680, "08:50", 1.2650, Win),
        signal("h3", "USD/JPY", Buy, 68, High, OneHour, 148.90, "08:30", 149.40, Loss),
        signal("h4", "AUD/USD", Sell, 91, Medium, FiveMinutes, 0.6560, "08:10", 0.6535, Win),
    ]
}
