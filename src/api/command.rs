//! Operator command endpoint for the polling loop.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub command: String,
}

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    /// Whether the input matched a known command. The surface clears the
    /// command field only when true.
    pub recognized: bool,
    pub armed: bool,
    pub countdown: u32,
}

#[derive(Debug, Serialize)]
pub struct PollingStatusResponse {
    pub armed: bool,
    pub countdown: u32,
}

/// Create the command router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_command))
        .route("/status", get(polling_status))
}

/// Interpret one operator command. Unrecognized input is a 200 with
/// `recognized: false`, never an error.
async fn submit_command(
    State(state): State<AppState>,
    Json(request): Json<CommandRequest>,
) -> Json<CommandResponse> {
    let outcome = state.interpreter.handle(&request.command);
    let (armed, countdown) = state.poller.status();

    Json(CommandResponse {
        recognized: outcome.recognized(),
        armed,
        countdown,
    })
}

/// Current polling state for the countdown display.
async fn polling_status(State(state): State<AppState>) -> Json<PollingStatusResponse> {
    let (armed, countdown) = state.poller.status();
    Json(PollingStatusResponse { armed, countdown })
}
