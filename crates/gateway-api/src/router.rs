//! Route definitions for the gateway HTTP API.
//!
//! Mock REST routes are mounted under `/api`, next to `/health`, the
//! `/ws` upgrade, and the static admin UI at `/admin`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use std::path::Path;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, header::CACHE_CONTROL},
    middleware as axum_middleware,
    routing::{get, post},
};
use tower::Layer;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::{SetResponseHeader, SetResponseHeaderLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use gateway_core::config::AdminConfig;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(data_routes())
        .merge(debate_routes())
        .merge(vote_routes())
        .merge(comment_routes())
        .merge(stream_routes())
        .merge(admin_routes())
        .fallback(handlers::fallback::api_not_found)
        .layer(axum_middleware::from_fn(
            middleware::headers::gateway_headers,
        ));

    let mut router = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/ws", get(handlers::ws::ws_upgrade))
        .nest("/api", api_routes);

    if let Some(admin) = admin_service(&state.config.admin) {
        router = router.nest_service("/admin", admin);
    }

    router
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(axum_middleware::from_fn(
            middleware::headers::security_headers,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Liveness endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// JSON files from the data directory
fn data_routes() -> Router<AppState> {
    Router::new().route("/data/{filename}", get(handlers::data::get_data_file))
}

/// Topics and AI annotations
fn debate_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/debate-topic", get(handlers::debate::current_topic))
        .route("/v1/debate-topics", get(handlers::debate::list_topics))
        .route("/v1/ai-content", get(handlers::debate::ai_content))
}

fn vote_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/votes", get(handlers::vote::get_votes))
        .route("/v1/user-vote", post(handlers::vote::submit_vote))
}

/// Comments and users
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/comments", get(handlers::content::list_comments))
        .route("/comment", post(handlers::content::create_comment))
        .route("/v1/users", get(handlers::content::list_users))
}

fn stream_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/streams", get(handlers::stream::list_streams))
        .route("/v1/rtmp-urls/{room}", get(handlers::stream::rtmp_urls))
}

/// Admin panel endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/live/status", get(handlers::admin::live_status))
        .route("/admin/dashboard", get(handlers::admin::dashboard))
        .route("/v1/admin/streams", get(handlers::admin::list_streams))
        .route("/admin/broadcast", post(handlers::admin::send_broadcast))
}

/// Static admin UI, or `None` when its directory is missing.
fn admin_service(config: &AdminConfig) -> Option<SetResponseHeader<ServeDir, HeaderValue>> {
    let dir = Path::new(&config.directory);
    if !dir.is_dir() {
        warn!(directory = %dir.display(), "Admin directory not found, /admin not mounted");
        return None;
    }

    let cache_control =
        match HeaderValue::try_from(format!("public, max-age={}", config.max_age_seconds)) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Invalid admin cache header, /admin not mounted");
                return None;
            }
        };

    info!(directory = %dir.display(), "Serving admin UI at /admin");
    Some(
        SetResponseHeaderLayer::overriding(CACHE_CONTROL, cache_control)
            .layer(ServeDir::new(dir)),
    )
}
