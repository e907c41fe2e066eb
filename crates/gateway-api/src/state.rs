//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use gateway_core::config::AppConfig;
use gateway_mock::MockDataProvider;
use gateway_realtime::RealtimeEngine;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped so cloning per request stays cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// WebSocket registry, broadcaster, and metrics
    pub realtime: Arc<RealtimeEngine>,
    /// Fixture source for the mock REST endpoints
    pub mock: Arc<MockDataProvider>,
    /// Process start, used for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Builds the state from configuration and a running engine.
    pub fn new(config: Arc<AppConfig>, realtime: Arc<RealtimeEngine>) -> Self {
        let mock = Arc::new(MockDataProvider::new(config.mock.clone()));
        Self {
            config,
            realtime,
            mock,
            started_at: Instant::now(),
        }
    }

    /// Seconds since the state was built.
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
