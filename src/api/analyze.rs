//! Chart screenshot upload endpoint.

use axum::{
    extract::{Multipart, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::types::Signal;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub signal: Signal,
    /// Data-URI form of the upload, for local preview.
    pub preview: String,
}

/// Create the analyze router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(analyze_chart))
}

/// Submit one chart screenshot for analysis.
///
/// Expects a multipart body with an `image` field. 400 when no file is
/// present, 409 while a previous analysis is still in flight.
async fn analyze_chart(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>> {
    let mut upload: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {}", e)))?
    {
        if field.name() == Some("image") {
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("failed to read upload: {}", e)))?;
            upload = Some((bytes.to_vec(), content_type));
            break;
        }
    }

    let (bytes, content_type) =
        upload.ok_or_else(|| AppError::BadRequest("no image selected".into()))?;

    let outcome = state.pipeline.submit(&bytes, &content_type).await?;

    Ok(Json(AnalyzeResponse {
        signal: outcome.signal,
        preview: outcome.preview,
    }))
}
