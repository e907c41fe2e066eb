//! Request DTOs.

use serde::Deserialize;

/// Vote counts submitted by a client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVoteRequest {
    /// Votes for the left side.
    #[serde(default)]
    pub left_votes: Option<u64>,
    /// Votes for the right side.
    #[serde(default)]
    pub right_votes: Option<u64>,
    /// Stream the votes belong to.
    #[serde(default)]
    pub stream_id: Option<String>,
}

/// Body of `POST /api/v1/user-vote`, either wrapped in `request` or flat.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserVoteBody {
    /// `{"request": {...}}`
    Wrapped {
        /// The actual vote.
        request: UserVoteRequest,
    },
    /// `{"leftVotes": .., "rightVotes": .., "streamId": ..}`
    Flat(UserVoteRequest),
}

impl UserVoteBody {
    /// Unwraps either shape into the vote itself.
    pub fn into_request(self) -> UserVoteRequest {
        match self {
            Self::Wrapped { request } => request,
            Self::Flat(request) => request,
        }
    }
}

/// Body of `POST /api/comment`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub content_id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
}

/// `?stream_id=` filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamQuery {
    pub stream_id: Option<String>,
}

/// `?content_id=` filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentQuery {
    pub content_id: Option<String>,
}
