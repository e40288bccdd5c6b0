pub mod analyze;
pub mod command;
pub mod health;
pub mod signals;

use crate::AppState;
use axum::Router;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/api/signals", signals::router())
        .nest("/api/command", command::router())
        .nest("/api/analyze", analyze::router())
}
