//! REST endpoint tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_reports_service() {
    let app = TestApp::new();
    for path in ["/health", "/api/health"] {
        let (status, _, body) = app.get(path).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
        assert_eq!(body["service"], "live-debate-gateway");
        assert_eq!(body["version"], "2.0.0");
        assert_eq!(body["connections"], 0);
        assert!(body.get("success").is_none());
    }
}

#[tokio::test]
async fn test_detailed_health_includes_metrics() {
    let app = TestApp::new();
    let (status, _, body) = app.get("/api/health/detailed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["realtime"]["connectionsActive"], 0);
    assert_eq!(body["clients"], json!([]));
}

#[tokio::test]
async fn test_api_responses_carry_gateway_headers() {
    let app = TestApp::new();
    let (_, headers, _) = app.get("/api/v1/streams").await;
    assert_eq!(headers["x-gateway-version"], "2.0.0");
    assert_eq!(headers["x-processed-by"], "live-debate-gateway");
    assert_eq!(
        headers["cache-control"],
        "no-cache, no-store, must-revalidate"
    );
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "SAMEORIGIN");
    assert_eq!(headers["referrer-policy"], "no-referrer");
}

#[tokio::test]
async fn test_security_headers_outside_api() {
    let app = TestApp::new();
    let (_, headers, _) = app.get("/health").await;
    assert_eq!(headers["x-dns-prefetch-control"], "off");
    assert_eq!(headers["cross-origin-opener-policy"], "same-origin");
    assert!(headers.get("x-gateway-version").is_none());
}

#[tokio::test]
async fn test_unknown_api_path_is_json_404() {
    let app = TestApp::new();
    let (status, headers, body) = app.get("/api/v1/nope?x=1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "API接口不存在: /api/v1/nope?x=1");
    assert!(body["timestamp"].is_string());
    assert_eq!(headers["x-processed-by"], "live-debate-gateway");
}

#[tokio::test]
async fn test_votes_for_known_and_unknown_streams() {
    let app = TestApp::new();

    let (status, _, body) = app.get("/api/v1/votes?stream_id=stream-3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["streamId"], "stream-3");
    assert_eq!(body["data"]["leftVotes"], 67);
    assert_eq!(body["data"]["totalVotes"], 156);

    let (_, _, body) = app.get("/api/v1/votes?stream_id=other").await;
    assert_eq!(body["data"]["streamId"], "other");
    assert_eq!(body["data"]["totalVotes"], 443);

    let (_, _, body) = app.get("/api/v1/votes").await;
    assert_eq!(body["data"]["streamId"], "stream-1");
}

#[tokio::test]
async fn test_user_vote_accepts_wrapped_and_flat() {
    let app = TestApp::new();

    let (status, _, body) = app
        .post(
            "/api/v1/user-vote",
            json!({"request": {"leftVotes": 10, "rightVotes": 5, "streamId": "stream-2"}}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "投票成功");
    assert_eq!(body["data"]["streamId"], "stream-2");
    assert_eq!(body["data"]["totalVotes"], 15);

    let (_, _, body) = app
        .post("/api/v1/user-vote", json!({"leftVotes": 2}))
        .await;
    assert_eq!(body["data"]["streamId"], "stream-1");
    assert_eq!(body["data"]["rightVotes"], 0);
    assert_eq!(body["data"]["totalVotes"], 2);
}

#[tokio::test]
async fn test_bad_request_bodies_get_json_errors() {
    let app = TestApp::new();

    let raw = |path: &str, content_type: Option<&str>, body: &'static str| {
        let mut builder = Request::builder().method("POST").uri(path);
        if let Some(ct) = content_type {
            builder = builder.header("content-type", ct);
        }
        builder.body(Body::from(body)).expect("request")
    };

    let cases = [
        (
            raw("/api/v1/user-vote", Some("application/json"), "{bad"),
            StatusCode::BAD_REQUEST,
        ),
        (
            raw("/api/comment", Some("application/json"), r#"{"text":42}"#),
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        (
            raw("/api/admin/broadcast", None, r#"{"notice":"x"}"#),
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ),
    ];

    for (request, expected) in cases {
        let (status, headers, body) = app.send(request).await;
        assert_eq!(status, expected);
        assert!(
            headers["content-type"]
                .to_str()
                .expect("header")
                .starts_with("application/json")
        );
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
        assert!(body["timestamp"].is_string());
    }
}

#[tokio::test]
async fn test_debate_topic_endpoints() {
    let app = TestApp::new();

    let (_, _, body) = app.get("/api/v1/debate-topic").await;
    assert_eq!(body["data"]["id"], "debate-1");
    assert_eq!(body["data"]["leftSide"], "会按");
    assert_eq!(body["data"]["rightPosition"], "不会按");

    let (_, _, body) = app.get("/api/v1/debate-topics").await;
    let topics = body["data"].as_array().expect("topics");
    assert_eq!(topics.len(), 3);
    assert!(topics[0]["createdAt"].is_string());
}

#[tokio::test]
async fn test_ai_content_lists_total() {
    let app = TestApp::new();
    let (_, _, body) = app.get("/api/v1/ai-content").await;
    assert_eq!(body["total"], 3);
    assert_eq!(body["data"][0]["type"], "speech");

    let (_, _, body) = app.get("/api/v1/ai-content?stream_id=stream-1").await;
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_comments_and_new_comment() {
    let app = TestApp::new();

    let (_, _, body) = app.get("/api/v1/comments?content_id=content-2").await;
    let comments = body["data"].as_array().expect("comments");
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["user"], "王五");

    let (status, _, body) = app
        .post("/api/comment", json!({"contentId": "content-1", "text": "支持正方"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "评论添加成功");
    assert_eq!(body["data"]["user"], "匿名用户");
    assert_eq!(body["data"]["avatar"], "👤");
    assert_eq!(body["data"]["likes"], 0);
    assert_eq!(body["data"]["text"], "支持正方");
}

#[tokio::test]
async fn test_streams_users_and_rtmp_urls() {
    let app = TestApp::new();

    let (_, _, body) = app.get("/api/v1/streams").await;
    assert_eq!(body["data"].as_array().expect("streams").len(), 3);
    assert_eq!(body["data"][2]["status"], "inactive");

    let (_, _, body) = app.get("/api/v1/users").await;
    assert_eq!(body["data"][0]["username"], "zhangsan");

    let (_, _, body) = app.get("/api/v1/rtmp-urls/room-9").await;
    assert_eq!(body["data"]["room_name"], "room-9");
    assert_eq!(
        body["data"]["push_url"],
        "rtmp://192.168.31.189:1935/live/room-9"
    );
    assert_eq!(
        body["data"]["play_hls"],
        "http://192.168.31.189:8086/live/room-9.m3u8"
    );
}

#[tokio::test]
async fn test_admin_endpoints() {
    let app = TestApp::new();

    let (_, _, body) = app.get("/api/admin/live/status").await;
    assert_eq!(body["data"]["isLive"], true);
    assert_eq!(body["data"]["currentStreamId"], "stream-1");

    let (_, _, body) = app.get("/api/admin/dashboard").await;
    assert_eq!(body["data"]["totalUsers"], 25_000);
    assert_eq!(body["data"]["totalComments"], 850);

    let (_, _, body) = app.get("/api/v1/admin/streams").await;
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["streams"][1]["id"], "stream-2");
}

#[tokio::test]
async fn test_data_file_served() {
    let app = TestApp::new();
    app.write_data_file("debates", r#"{"items":[1,2,3]}"#);

    let (status, _, body) = app.get("/api/data/debates").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["items"], json!([1, 2, 3]));
}

#[tokio::test]
async fn test_data_file_errors() {
    let app = TestApp::new();
    app.write_data_file("broken", "{not json");

    let (status, _, body) = app.get("/api/data/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "数据文件不存在: missing.json");

    let (status, _, body) = app.get("/api/data/broken").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "读取数据文件失败");

    let (status, _, body) = app.get("/api/data/..%2Fsecret").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_admin_static_files() {
    let app = TestApp::new();
    let admin = app.dir.path().join("admin");
    std::fs::create_dir_all(&admin).expect("admin dir");
    std::fs::write(admin.join("index.html"), "<h1>admin</h1>").expect("index");

    let (status, headers, _) = app.get("/admin/index.html").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["cache-control"], "public, max-age=86400");
    assert_eq!(headers["x-frame-options"], "SAMEORIGIN");
    assert!(headers.get("x-gateway-version").is_none());
}

#[tokio::test]
async fn test_admin_not_mounted_without_directory() {
    let app = TestApp::new();
    let request = Request::builder()
        .uri("/admin/index.html")
        .body(Body::empty())
        .expect("request");
    let (status, _, _) = app.send(request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_mirrors_origin_with_credentials() {
    let app = TestApp::new();
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/v1/votes")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .expect("request");

    let (status, headers, _) = app.send(request).await;
    assert!(status.is_success());
    assert_eq!(
        headers["access-control-allow-origin"],
        "http://localhost:5173"
    );
    assert_eq!(headers["access-control-allow-credentials"], "true");
}
