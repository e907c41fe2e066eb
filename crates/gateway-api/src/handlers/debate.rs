//! Debate topic and AI content handlers.

use axum::Json;
use axum::extract::{Query, State};

use gateway_mock::models::{AiContent, DebateTopic};

use crate::dto::request::StreamQuery;
use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/debate-topic
pub async fn current_topic(State(state): State<AppState>) -> Json<ApiResponse<DebateTopic>> {
    Json(ApiResponse::ok(state.mock.current_topic()))
}

/// GET /api/v1/debate-topics
pub async fn list_topics(State(state): State<AppState>) -> Json<ApiResponse<Vec<DebateTopic>>> {
    Json(ApiResponse::ok(state.mock.debate_topics()))
}

/// GET /api/v1/ai-content?stream_id=
pub async fn ai_content(
    State(state): State<AppState>,
    Query(query): Query<StreamQuery>,
) -> Json<ApiResponse<Vec<AiContent>>> {
    let items = state.mock.ai_content(query.stream_id.as_deref());
    let total = items.len();
    Json(ApiResponse::ok(items).with_total(total))
}
