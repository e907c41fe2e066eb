//! Health check handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{DetailedHealthResponse, HealthResponse, SERVICE_NAME, now_iso};
use crate::state::AppState;

/// GET /health, GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(build_health(&state))
}

/// GET /api/health/detailed
pub async fn health_detailed(State(state): State<AppState>) -> Json<DetailedHealthResponse> {
    Json(DetailedHealthResponse {
        health: build_health(&state),
        realtime: state.realtime.metrics.snapshot(),
        clients: state.realtime.registry.snapshot(),
    })
}

fn build_health(state: &AppState) -> HealthResponse {
    HealthResponse {
        status: "OK".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now_iso(),
        uptime: state.uptime_seconds(),
        connections: state.realtime.connection_count(),
    }
}
