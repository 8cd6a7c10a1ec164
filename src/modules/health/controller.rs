use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::modules::health::model::HealthResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Database is reachable", body = HealthResponse),
        (status = 503, description = "Database is unreachable", body = HealthResponse)
    ),
    tag = "Health"
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.db.verify_connectivity_within(state.probe_timeout).await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::reachable())),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse::unreachable(&err)),
        ),
    }
}
