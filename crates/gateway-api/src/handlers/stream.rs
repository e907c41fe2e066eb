//! Stream and streaming address handlers.

use axum::Json;
use axum::extract::{Path, State};

use gateway_mock::models::{RtmpUrls, Stream};

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/streams
pub async fn list_streams(State(state): State<AppState>) -> Json<ApiResponse<Vec<Stream>>> {
    Json(ApiResponse::ok(state.mock.streams()))
}

/// GET /api/v1/rtmp-urls/{room}
pub async fn rtmp_urls(
    State(state): State<AppState>,
    Path(room): Path<String>,
) -> Json<ApiResponse<RtmpUrls>> {
    Json(ApiResponse::ok(state.mock.rtmp_urls(&room)))
}

