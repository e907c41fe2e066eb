//! JSON data file handler.

use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use axum::Json;
use axum::extract::{Path as UrlPath, State};
use serde_json::Value;
use tracing::{debug, error};

use gateway_core::error::AppError;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

const READ_FAILED: &str = "读取数据文件失败";

/// GET /api/data/{filename}
///
/// Serves `{data_dir}/{filename}.json` parsed as JSON.
pub async fn get_data_file(
    State(state): State<AppState>,
    UrlPath(filename): UrlPath<String>,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    if !is_plain_stem(&filename) {
        return Err(AppError::validation(format!("无效的数据文件名: {filename}")).into());
    }

    let path = Path::new(&state.config.data.directory).join(format!("{filename}.json"));
    debug!(path = %path.display(), "Reading data file");

    let raw = match tokio::fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == IoErrorKind::NotFound => {
            return Err(AppError::not_found(format!("数据文件不存在: {filename}.json")).into());
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to read data file");
            return Err(AppError::storage(READ_FAILED).into());
        }
    };

    let data: Value = serde_json::from_str(&raw).map_err(|e| {
        error!(path = %path.display(), error = %e, "Failed to parse data file");
        AppError::internal(READ_FAILED)
    })?;

    Ok(Json(ApiResponse::ok(data)))
}

/// A name that stays inside the data directory once `.json` is appended.
fn is_plain_stem(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
