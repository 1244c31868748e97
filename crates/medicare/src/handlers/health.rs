//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (round-trip to the store)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Does not touch the store.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Returns 200 when the store answers a trivial query, 503 otherwise.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Response {
    match state.patient_repo.ping().await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "healthy": true }))).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Store readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "healthy": false,
                    "error": e.to_string()
                })),
            )
                .into_response()
        }
    }
}
