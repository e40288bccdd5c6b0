//! Pure filtering over the active signal collection.

use crate::types::{FilterCriteria, Signal};

/// Apply filter criteria to an ordered signal sequence.
///
/// Stable: input order is preserved and nothing is re-sorted. An empty
/// result is a valid, displayable state.
pub fn filter_signals(signals: &[Signal], criteria: &FilterCriteria) -> Vec<Signal> {
    signals
        .iter()
        .filter(|signal| criteria.matches(signal))
        .cloned()
        .collect()
}
