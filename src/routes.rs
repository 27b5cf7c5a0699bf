use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::{PreviewGenerator, ScrapGenerator, ScrapOutcome};

pub const FETCH_FAILED_MESSAGE: &str =
    "Sorry but something went wrong and the request wasn't able to complete.";
pub const UNSUPPORTED_MESSAGE: &str = "Not able to automatically parse the url.";

#[derive(Debug, Deserialize)]
pub struct ScrapRequest {
    pub url: String,
}

/// Build the application router around a shared generator.
pub fn app(generator: Arc<ScrapGenerator>) -> Router {
    Router::new()
        .route("/scrap", post(scrap_url))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(generator)
}

pub async fn health_check() -> &'static str {
    "OK"
}

/// POST /scrap — fetch the supplied URL and respond with extracted preview
/// metadata. Outcomes map onto statuses: parsed → 200, non-HTML → 206,
/// unfetchable → 400 with an empty data object.
pub async fn scrap_url(
    State(generator): State<Arc<ScrapGenerator>>,
    Json(request): Json<ScrapRequest>,
) -> impl IntoResponse {
    debug!(url = %request.url, "Handling scrap request");

    match generator.generate_preview(&request.url).await {
        ScrapOutcome::Parsed(preview) => (StatusCode::OK, Json(json!({ "data": preview }))),
        ScrapOutcome::Unsupported {
            status_hint,
            preview,
        } => (
            StatusCode::from_u16(status_hint).unwrap_or(StatusCode::PARTIAL_CONTENT),
            Json(json!({ "message": UNSUPPORTED_MESSAGE, "data": preview })),
        ),
        ScrapOutcome::Failed => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": FETCH_FAILED_MESSAGE, "data": {} })),
        ),
    }
}
