//! JSON 404 for unmatched `/api` paths.

use axum::Json;
use axum::extract::OriginalUri;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::error::ApiErrorResponse;

/// Fallback for the `/api` router. Reports the full path and query the
/// client sent, not the one seen after nesting.
pub async fn api_not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorResponse::new(format!("API接口不存在: {path}"))),
    )
}
