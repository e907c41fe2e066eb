//! Inbound and outbound WebSocket message type definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A client frame, decoded once and classified by its `type` field.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundMessage {
    /// Keepalive request; answered with `pong` to the sender only.
    Ping,
    /// Subscription intent. Logged only; broadcasts are not filtered.
    Subscribe {
        /// Requested channel, if any.
        channel: Option<String>,
    },
    /// Any other valid JSON, relayed verbatim to the other clients.
    Relay(Value),
}

impl InboundMessage {
    /// Parses a text frame. Fails only when the frame is not JSON.
    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::classify(value))
    }

    /// Classifies an already-parsed payload.
    pub fn classify(value: Value) -> Self {
        match value.get("type").and_then(Value::as_str) {
            Some("ping") => Self::Ping,
            Some("subscribe") => Self::Subscribe {
                channel: value
                    .get("channel")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
            _ => Self::Relay(value),
        }
    }
}

/// Messages sent by the server to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutboundMessage {
    /// Welcome message sent once right after accept.
    Connected {
        /// Greeting text.
        message: String,
        /// Server time.
        #[serde(with = "super::timestamp")]
        timestamp: DateTime<Utc>,
        /// Server identifier, e.g. `live-debate-gateway-v2.0.0`.
        server: String,
    },
    /// Reply to a client `ping`.
    Pong {
        /// Server time.
        #[serde(with = "super::timestamp")]
        timestamp: DateTime<Utc>,
    },
    /// A payload relayed from another client (or the admin API).
    Broadcast {
        /// The original payload, untouched.
        data: Value,
        /// Relay time.
        #[serde(with = "super::timestamp")]
        timestamp: DateTime<Utc>,
    },
    /// The client sent something that could not be parsed.
    Error {
        /// Error description.
        message: String,
        /// Server time.
        #[serde(with = "super::timestamp")]
        timestamp: DateTime<Utc>,
    },
    /// Periodic live status push.
    LiveStatus {
        /// Status payload.
        data: LiveStatusData,
    },
}

impl OutboundMessage {
    /// Serializes the message into a text frame.
    pub fn to_frame(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// The `type` discriminator as it appears on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connected { .. } => "connected",
            Self::Pong { .. } => "pong",
            Self::Broadcast { .. } => "broadcast",
            Self::Error { .. } => "error",
            Self::LiveStatus { .. } => "liveStatus",
        }
    }
}

/// Body of a `liveStatus` push.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStatusData {
    /// Whether the debate stream is live.
    pub is_live: bool,
    /// Synthetic viewer count.
    pub viewers: u64,
    /// Sample time.
    #[serde(with = "super::timestamp")]
    pub timestamp: DateTime<Utc>,
}
