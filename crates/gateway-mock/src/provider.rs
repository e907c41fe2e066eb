//! Mock data provider backing the REST handlers.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

use gateway_core::config::MockConfig;

use crate::models::{
    AiContent, Comment, Dashboard, DebateTopic, LiveStatus, RtmpUrls, Stream, StreamSummary, User,
    VoteReceipt, VoteTally,
};

/// Stream every lookup falls back to.
pub const DEFAULT_STREAM_ID: &str = "stream-1";

/// Name given to comments posted without one.
pub const ANONYMOUS_USER: &str = "匿名用户";

const AVATAR: &str = "👤";

const CURRENT_TOPIC_TITLE: &str = "如果有一个能一键消除痛苦的按钮，你会按吗？";

/// Fixed vote tallies per stream: (stream id, left, right).
const VOTE_TALLIES: [(&str, u64, u64); 3] = [
    ("stream-1", 245, 198),
    ("stream-2", 189, 234),
    ("stream-3", 67, 89),
];

struct TopicTemplate {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    left: &'static str,
    right: &'static str,
    stream_id: &'static str,
}

const TOPICS: [TopicTemplate; 3] = [
    TopicTemplate {
        id: "debate-1",
        title: CURRENT_TOPIC_TITLE,
        description: "这是一个关于痛苦、成长与人性选择的深度辩论。探讨人类面对痛苦时的选择，以及这种选择对个人和社会的影响。",
        left: "会按",
        right: "不会按",
        stream_id: "stream-1",
    },
    TopicTemplate {
        id: "debate-2",
        title: "人工智能应该拥有自主意识吗？",
        description: "随着AI技术的快速发展，我们需要思考机器是否应该拥有自主意识，以及这将如何影响人类社会。",
        left: "应该",
        right: "不应该",
        stream_id: "stream-2",
    },
    TopicTemplate {
        id: "debate-3",
        title: "社交媒体促进了还是阻碍了人际关系？",
        description: "社交媒体的普及改变了人们沟通的方式，我们需要探讨它对真实人际关系的影响。",
        left: "促进了",
        right: "阻碍了",
        stream_id: "stream-3",
    },
];

/// Serves fixture literals with timestamps relative to the call.
#[derive(Debug, Clone, Default)]
pub struct MockDataProvider {
    config: MockConfig,
}

impl MockDataProvider {
    /// Creates a provider using the configured streaming addresses.
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// All streams, active and inactive.
    pub fn streams(&self) -> Vec<Stream> {
        let now = Utc::now();
        vec![
            Stream {
                id: "stream-1".to_string(),
                name: "辩论赛场A".to_string(),
                description: "正方vs反方精彩辩论".to_string(),
                status: "active".to_string(),
                viewers: 1250,
                start_time: iso(now),
                stream_url: self.push_url("stream-1"),
                created_at: iso(now - Duration::hours(24)),
            },
            Stream {
                id: "stream-2".to_string(),
                name: "辩论赛场B".to_string(),
                description: "青年辩论家对决".to_string(),
                status: "active".to_string(),
                viewers: 890,
                start_time: iso(now),
                stream_url: self.push_url("stream-2"),
                created_at: iso(now - Duration::hours(12)),
            },
            Stream {
                id: "stream-3".to_string(),
                name: "辩论赛场C".to_string(),
                description: "模拟联合国辩论".to_string(),
                status: "inactive".to_string(),
                viewers: 0,
                start_time: iso(now - Duration::hours(2)),
                stream_url: self.push_url("stream-3"),
                created_at: iso(now - Duration::hours(48)),
            },
        ]
    }

    /// Active streams in their admin summary form.
    pub fn admin_streams(&self) -> Vec<StreamSummary> {
        self.streams()
            .iter()
            .filter(|s| s.status == "active")
            .map(StreamSummary::from)
            .collect()
    }

    /// The topic currently being debated, without bookkeeping timestamps.
    pub fn current_topic(&self) -> DebateTopic {
        topic_from(&TOPICS[0], None)
    }

    /// Every topic fixture.
    pub fn debate_topics(&self) -> Vec<DebateTopic> {
        let now = Utc::now();
        TOPICS
            .iter()
            .map(|t| topic_from(t, Some(now)))
            .collect()
    }

    /// Vote tally for `stream_id`; unknown or missing ids get the default
    /// stream's figures while keeping the requested id.
    pub fn votes(&self, stream_id: Option<&str>) -> VoteTally {
        let requested = stream_id.unwrap_or(DEFAULT_STREAM_ID);
        let (_, left, right) = VOTE_TALLIES
            .iter()
            .find(|(id, _, _)| *id == requested)
            .copied()
            .unwrap_or(VOTE_TALLIES[0]);

        VoteTally {
            stream_id: requested.to_string(),
            left_votes: left,
            right_votes: right,
            total_votes: left + right,
            last_updated: iso(Utc::now()),
        }
    }

    /// Acknowledges a vote submission without storing it.
    pub fn record_vote(&self, stream_id: Option<String>, left: u64, right: u64) -> VoteReceipt {
        VoteReceipt {
            stream_id: stream_id.unwrap_or_else(|| DEFAULT_STREAM_ID.to_string()),
            left_votes: left,
            right_votes: right,
            total_votes: left.saturating_add(right),
            timestamp: iso(Utc::now()),
        }
    }

    /// Comment fixtures, optionally limited to one content item.
    pub fn comments(&self, content_id: Option<&str>) -> Vec<Comment> {
        let now = Utc::now();
        let fixtures = [
            ("comment-1", "content-1", "辩论得真精彩！", "张三", 12, 10),
            ("comment-2", "content-1", "正方辩手说得很有道理", "李四", 8, 8),
            ("comment-3", "content-2", "期待反方的反驳", "王五", 5, 5),
        ];

        fixtures
            .iter()
            .filter(|(_, content, ..)| content_id.is_none_or(|wanted| wanted == *content))
            .map(|(id, content, text, user, likes, minutes_ago)| Comment {
                id: id.to_string(),
                content_id: Some(content.to_string()),
                text: Some(text.to_string()),
                user: user.to_string(),
                avatar: AVATAR.to_string(),
                likes: *likes,
                created_at: iso(now - Duration::minutes(*minutes_ago)),
                is_liked: Some(false),
            })
            .collect()
    }

    /// Builds the comment a viewer just posted. The id is the current
    /// epoch time in milliseconds.
    pub fn new_comment(
        &self,
        content_id: Option<String>,
        text: Option<String>,
        user: Option<String>,
    ) -> Comment {
        let now = Utc::now();
        Comment {
            id: now.timestamp_millis().to_string(),
            content_id,
            text,
            user: user
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| ANONYMOUS_USER.to_string()),
            avatar: AVATAR.to_string(),
            likes: 0,
            created_at: iso(now),
            is_liked: None,
        }
    }

    /// AI annotations, optionally limited to one stream.
    pub fn ai_content(&self, stream_id: Option<&str>) -> Vec<AiContent> {
        let now = Utc::now();
        let items = vec![
            AiContent {
                id: "ai-1".to_string(),
                stream_id: "stream-1".to_string(),
                kind: "speech".to_string(),
                content: "辩论双方正在激烈交锋".to_string(),
                confidence: 0.85,
                timestamp: iso(now),
                speaker: "正方辩手".to_string(),
                emotion: "激动".to_string(),
                keywords: strings(&["辩论", "激烈", "交锋"]),
            },
            AiContent {
                id: "ai-2".to_string(),
                stream_id: "stream-1".to_string(),
                kind: "emotion".to_string(),
                content: "观众情绪高涨".to_string(),
                confidence: 0.92,
                timestamp: iso(now - Duration::minutes(2)),
                speaker: "观众".to_string(),
                emotion: "开心".to_string(),
                keywords: strings(&["观众", "情绪", "高涨"]),
            },
            AiContent {
                id: "ai-3".to_string(),
                stream_id: "stream-2".to_string(),
                kind: "keyword".to_string(),
                content: "检测到关键词：人工智能、自主意识".to_string(),
                confidence: 0.78,
                timestamp: iso(now - Duration::minutes(5)),
                speaker: "反方辩手".to_string(),
                emotion: "平静".to_string(),
                keywords: strings(&["人工智能", "自主意识"]),
            },
        ];

        match stream_id {
            Some(wanted) => items.into_iter().filter(|a| a.stream_id == wanted).collect(),
            None => items,
        }
    }

    /// User fixtures.
    pub fn users(&self) -> Vec<User> {
        [
            ("user-1", "zhangsan", "张三"),
            ("user-2", "lisi", "李四"),
            ("user-3", "wangwu", "王五"),
        ]
        .iter()
        .map(|(id, username, nickname)| User {
            id: id.to_string(),
            username: username.to_string(),
            nickname: nickname.to_string(),
            avatar: AVATAR.to_string(),
            email: format!("{username}@example.com"),
        })
        .collect()
    }

    /// Admin live status.
    pub fn live_status(&self) -> LiveStatus {
        LiveStatus {
            is_live: true,
            live_stream_url: self.push_url(DEFAULT_STREAM_ID),
            current_stream_id: DEFAULT_STREAM_ID.to_string(),
            viewers: 1250,
            status: "active".to_string(),
        }
    }

    /// Admin dashboard counters.
    pub fn dashboard(&self) -> Dashboard {
        Dashboard {
            is_live: true,
            live_stream_url: self.push_url(DEFAULT_STREAM_ID),
            total_users: 25_000,
            active_users: 1250,
            total_votes: 15_000,
            total_comments: 850,
            total_streams: TOPICS.len() as u64,
            current_debate_topic: CURRENT_TOPIC_TITLE.to_string(),
            last_updated: iso(Utc::now()),
        }
    }

    /// Push/playback URLs for `room`.
    pub fn rtmp_urls(&self, room: &str) -> RtmpUrls {
        let play_base = self.config.play_base_url.trim_end_matches('/');
        RtmpUrls {
            room_name: room.to_string(),
            push_url: self.push_url(room),
            play_flv: format!("{play_base}/{room}.flv"),
            play_hls: format!("{play_base}/{room}.m3u8"),
        }
    }

    fn push_url(&self, room: &str) -> String {
        format!("{}/{room}", self.config.rtmp_base_url.trim_end_matches('/'))
    }
}

fn topic_from(t: &TopicTemplate, stamped: Option<DateTime<Utc>>) -> DebateTopic {
    DebateTopic {
        id: t.id.to_string(),
        title: t.title.to_string(),
        description: t.description.to_string(),
        left_side: t.left.to_string(),
        right_side: t.right.to_string(),
        left_position: t.left.to_string(),
        right_position: t.right.to_string(),
        stream_id: t.stream_id.to_string(),
        created_at: stamped.map(|now| iso(now - Duration::days(7))),
        updated_at: stamped.map(iso),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn iso(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
