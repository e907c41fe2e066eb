//! Response DTOs.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use gateway_realtime::connection::handle::ConnectionInfo;
use gateway_realtime::metrics::MetricsSnapshot;

/// Service name reported by health checks and response headers.
pub const SERVICE_NAME: &str = "live-debate-gateway";

/// Current time as an ISO-8601 UTC string with millisecond precision.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Optional confirmation text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data.
    pub data: T,
    /// Item count for list endpoints that report one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
            total: None,
        }
    }

    /// Adds a confirmation message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a top-level `total`.
    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }
}

/// Health check response. Not wrapped in [`ApiResponse`].
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
    /// Seconds since start.
    pub uptime: f64,
    /// Open WebSocket connections.
    pub connections: usize,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize)]
pub struct DetailedHealthResponse {
    #[serde(flatten)]
    pub health: HealthResponse,
    /// Real-time engine counters.
    pub realtime: MetricsSnapshot,
    /// Open WebSocket clients.
    pub clients: Vec<ConnectionInfo>,
}

/// Admin stream listing.
#[derive(Debug, Clone, Serialize)]
pub struct StreamListResponse<T: Serialize> {
    pub streams: Vec<T>,
    pub total: usize,
}

/// Result of an admin push to WebSocket clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastResponse {
    /// Connections the envelope was queued for.
    pub delivered: usize,
    pub timestamp: String,
}
