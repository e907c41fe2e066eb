//! Builder helpers for constructing outbound messages.

use chrono::Utc;
use serde_json::Value;

use super::types::{LiveStatusData, OutboundMessage};

/// Greeting sent to every client on accept.
pub const WELCOME_MESSAGE: &str = "欢迎连接直播辩论网关";

/// Reply text for frames that are not valid JSON.
pub const MALFORMED_MESSAGE: &str = "消息格式错误";

/// Build the welcome message
pub fn build_connected(server: &str) -> OutboundMessage {
    OutboundMessage::Connected {
        message: WELCOME_MESSAGE.to_string(),
        timestamp: Utc::now(),
        server: server.to_string(),
    }
}

/// Build a pong reply
pub fn build_pong() -> OutboundMessage {
    OutboundMessage::Pong {
        timestamp: Utc::now(),
    }
}

/// Wrap a relayed payload
pub fn build_broadcast(data: Value) -> OutboundMessage {
    OutboundMessage::Broadcast {
        data,
        timestamp: Utc::now(),
    }
}

/// Build the malformed-frame error
pub fn build_malformed_error() -> OutboundMessage {
    OutboundMessage::Error {
        message: MALFORMED_MESSAGE.to_string(),
        timestamp: Utc::now(),
    }
}

/// Build a live status push
pub fn build_live_status(viewers: u64) -> OutboundMessage {
    OutboundMessage::LiveStatus {
        data: LiveStatusData {
            is_live: true,
            viewers,
            timestamp: Utc::now(),
        },
    }
}
