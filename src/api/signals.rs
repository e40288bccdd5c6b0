//! Signal view endpoints: filtered active set, history, statistics.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::services;
use crate::types::{FilterCriteria, Signal, StatsSummary, Timeframe, Volatility};
use crate::AppState;

/// Query parameters for the active-signals endpoint. "all" (or absence)
/// on either enum parameter disables that predicate.
#[derive(Debug, Deserialize)]
pub struct SignalsQuery {
    pub timeframe: Option<String>,
    pub volatility: Option<String>,
    pub min_confidence: Option<u8>,
}

impl SignalsQuery {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            timeframe: self.timeframe.as_deref().and_then(Timeframe::from_str),
            volatility: self.volatility.as_deref().and_then(Volatility::from_str),
            min_confidence: self.min_confidence.unwrap_or(0).min(100),
        }
    }
}

#[derive(Serialize)]
pub struct SignalsResponse {
    pub signals: Vec<Signal>,
    pub count: usize,
    /// Whether the auto-refresh loop is armed.
    pub armed: bool,
    /// Seconds until the next automatic refresh.
    pub countdown: u32,
    pub timestamp: i64,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub signals: Vec<Signal>,
    pub timestamp: i64,
}

/// Create the signals router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_signals))
        .route("/history", get(get_history))
        .route("/stats", get(get_stats))
}

/// Get the active signals matching the filter criteria.
async fn get_signals(
    State(state): State<AppState>,
    Query(query): Query<SignalsQuery>,
) -> Json<SignalsResponse> {
    let active = state.store.active().await;
    let signals = services::filter_signals(&active, &query.criteria());
    let (armed, countdown) = state.poller.status();

    Json(SignalsResponse {
        count: signals.len(),
        signals,
        armed,
        countdown,
        timestamp: chrono::Utc::now().timestamp_millis(),
    })
}

/// Get the resolved signal history.
async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        signals: state.store.history().await,
        timestamp: chrono::Utc::now().timestamp_millis(),
    })
}

/// Get aggregate statistics across both collections.
async fn get_stats(State(state): State<AppState>) -> Json<StatsSummary> {
    let active = state.store.active().await;
    let history = state.store.history().await;
    Json(services::aggregate(&active, &history))
}
