//! Admin panel handlers.

use axum::Json;
use axum::extract::State;
use serde_json::Value;
use tracing::info;

use gateway_mock::models::{Dashboard, LiveStatus, StreamSummary};
use gateway_realtime::message::builder;

use crate::dto::response::{ApiResponse, BroadcastResponse, StreamListResponse, now_iso};
use crate::extractors::ApiJson;
use crate::state::AppState;

/// GET /api/admin/live/status
pub async fn live_status(State(state): State<AppState>) -> Json<ApiResponse<LiveStatus>> {
    Json(ApiResponse::ok(state.mock.live_status()))
}

/// GET /api/admin/dashboard
pub async fn dashboard(State(state): State<AppState>) -> Json<ApiResponse<Dashboard>> {
    Json(ApiResponse::ok(state.mock.dashboard()))
}

/// GET /api/v1/admin/streams
pub async fn list_streams(
    State(state): State<AppState>,
) -> Json<ApiResponse<StreamListResponse<StreamSummary>>> {
    let streams = state.mock.admin_streams();
    let total = streams.len();
    Json(ApiResponse::ok(StreamListResponse { streams, total }))
}

/// POST /api/admin/broadcast
///
/// Pushes the request body to every WebSocket client as a `broadcast`.
pub async fn send_broadcast(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Value>,
) -> Json<ApiResponse<BroadcastResponse>> {
    let delivered = state
        .realtime
        .broadcaster
        .broadcast_all(&builder::build_broadcast(payload));

    info!(delivered, "Admin broadcast sent");

    Json(
        ApiResponse::ok(BroadcastResponse {
            delivered,
            timestamp: now_iso(),
        })
        .with_message("广播已发送"),
    )
}
