//! Vote handlers.

use axum::Json;
use axum::extract::{Query, State};

use gateway_mock::models::{VoteReceipt, VoteTally};

use crate::dto::request::{StreamQuery, UserVoteBody};
use crate::dto::response::ApiResponse;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// GET /api/v1/votes?stream_id=
pub async fn get_votes(
    State(state): State<AppState>,
    Query(query): Query<StreamQuery>,
) -> Json<ApiResponse<VoteTally>> {
    Json(ApiResponse::ok(state.mock.votes(query.stream_id.as_deref())))
}

/// POST /api/v1/user-vote
pub async fn submit_vote(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<UserVoteBody>,
) -> Json<ApiResponse<VoteReceipt>> {
    let vote = body.into_request();
    let receipt = state.mock.record_vote(
        vote.stream_id,
        vote.left_votes.unwrap_or(0),
        vote.right_votes.unwrap_or(0),
    );

    tracing::info!(
        stream_id = %receipt.stream_id,
        total_votes = receipt.total_votes,
        "Vote received"
    );

    Json(ApiResponse::ok(receipt).with_message("投票成功"))
}
