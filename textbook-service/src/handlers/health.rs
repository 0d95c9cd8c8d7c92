use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::dtos::StatusResponse;
use crate::services::get_metrics;
use crate::startup::AppState;

pub const SERVICE_NAME: &str = "Physical AI Intelligence Engine (Gemini)";

/// Service banner; `model_status` tells whether a backend is configured.
pub async fn root(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online",
        service: SERVICE_NAME,
        model_status: if state.text_provider.is_some() {
            "active"
        } else {
            "inactive"
        },
    })
}

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "textbook-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe: the backend must be configured and reachable.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let Some(provider) = state.text_provider.as_ref() else {
        return StatusCode::SERVICE_UNAVAILABLE;
    };

    match provider.health_check().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Backend health check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

pub async fn metrics() -> impl IntoResponse {
    get_metrics()
}
