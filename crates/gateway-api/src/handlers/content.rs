//! Comment and user handlers.

use axum::Json;
use axum::extract::{Query, State};
use tracing::info;

use gateway_mock::models::{Comment, User};

use crate::dto::request::{ContentQuery, CreateCommentRequest};
use crate::dto::response::ApiResponse;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// GET /api/v1/comments?content_id=
pub async fn list_comments(
    State(state): State<AppState>,
    Query(query): Query<ContentQuery>,
) -> Json<ApiResponse<Vec<Comment>>> {
    Json(ApiResponse::ok(
        state.mock.comments(query.content_id.as_deref()),
    ))
}

/// POST /api/comment
pub async fn create_comment(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateCommentRequest>,
) -> Json<ApiResponse<Comment>> {
    let comment = state.mock.new_comment(req.content_id, req.text, req.user);
    info!(comment_id = %comment.id, user = %comment.user, "Comment added");
    Json(ApiResponse::ok(comment).with_message("评论添加成功"))
}

/// GET /api/v1/users
pub async fn list_users(State(state): State<AppState>) -> Json<ApiResponse<Vec<User>>> {
    Json(ApiResponse::ok(state.mock.users()))
}
