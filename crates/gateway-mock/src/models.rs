//! Fixture shapes, serialized in the camelCase the frontend expects.

use serde::{Deserialize, Serialize};

/// A debate live stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub viewers: u64,
    pub start_time: String,
    pub stream_url: String,
    pub created_at: String,
}

/// Reduced stream view used by the admin listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub viewers: u64,
}

impl From<&Stream> for StreamSummary {
    fn from(stream: &Stream) -> Self {
        Self {
            id: stream.id.clone(),
            name: stream.name.clone(),
            description: stream.description.clone(),
            status: stream.status.clone(),
            viewers: stream.viewers,
        }
    }
}

/// A debate topic with its two sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebateTopic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub left_side: String,
    pub right_side: String,
    /// Duplicate of `left_side` kept for older clients.
    pub left_position: String,
    /// Duplicate of `right_side` kept for older clients.
    pub right_position: String,
    pub stream_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Vote counts for one stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteTally {
    pub stream_id: String,
    pub left_votes: u64,
    pub right_votes: u64,
    pub total_votes: u64,
    pub last_updated: String,
}

/// Echo of a submitted vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteReceipt {
    pub stream_id: String,
    pub left_votes: u64,
    pub right_votes: u64,
    pub total_votes: u64,
    pub timestamp: String,
}

/// A viewer comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content_id: Option<String>,
    pub text: Option<String>,
    pub user: String,
    pub avatar: String,
    pub likes: u64,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_liked: Option<bool>,
}

/// An AI annotation of the live debate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiContent {
    pub id: String,
    pub stream_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub confidence: f64,
    pub timestamp: String,
    pub speaker: String,
    pub emotion: String,
    pub keywords: Vec<String>,
}

/// A platform user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub nickname: String,
    pub avatar: String,
    pub email: String,
}

/// Current broadcast state shown in the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStatus {
    pub is_live: bool,
    pub live_stream_url: String,
    pub current_stream_id: String,
    pub viewers: u64,
    pub status: String,
}

/// Admin dashboard counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub is_live: bool,
    pub live_stream_url: String,
    pub total_users: u64,
    pub active_users: u64,
    pub total_votes: u64,
    pub total_comments: u64,
    pub total_streams: u64,
    pub current_debate_topic: String,
    pub last_updated: String,
}

/// Push and playback URLs for a streaming room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RtmpUrls {
    pub room_name: String,
    pub push_url: String,
    pub play_flv: String,
    pub play_hls: String,
}
