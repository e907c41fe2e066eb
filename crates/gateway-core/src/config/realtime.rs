//! Real-time WebSocket engine configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Real-time (WebSocket) engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Per-connection outbound queue capacity.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer_size: usize,
    /// Seconds between `liveStatus` broadcasts.
    #[serde(default = "default_live_status_interval")]
    pub live_status_interval_seconds: u64,
    /// Lower bound (inclusive) of the synthetic viewer count.
    #[serde(default = "default_viewers_min")]
    pub viewers_min: u64,
    /// Upper bound (exclusive) of the synthetic viewer count.
    #[serde(default = "default_viewers_max")]
    pub viewers_max: u64,
    /// Server name announced in the welcome message.
    #[serde(default = "default_server_name")]
    pub server_name: String,
}

impl RealtimeConfig {
    /// Interval of the live status ticker.
    pub fn live_status_interval(&self) -> Duration {
        Duration::from_secs(self.live_status_interval_seconds.max(1))
    }
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            channel_buffer_size: default_channel_buffer(),
            live_status_interval_seconds: default_live_status_interval(),
            viewers_min: default_viewers_min(),
            viewers_max: default_viewers_max(),
            server_name: default_server_name(),
        }
    }
}

fn default_channel_buffer() -> usize {
    256
}

fn default_live_status_interval() -> u64 {
    30
}

fn default_viewers_min() -> u64 {
    1000
}

fn default_viewers_max() -> u64 {
    3000
}

fn default_server_name() -> String {
    "live-debate-gateway".to_string()
}
