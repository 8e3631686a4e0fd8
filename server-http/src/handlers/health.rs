use crate::api::HealthResponse;
use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::Utc;

/// GET /health - liveness plus store reachability
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = if state.auth_service.store_reachable().await {
        "connected"
    } else {
        "unavailable"
    };

    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
        database,
    })
}
