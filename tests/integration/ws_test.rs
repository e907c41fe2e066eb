//! WebSocket tests against a live server.

use std::time::Duration;

use futures::{SinkExt, StreamExt};
use serde_json::json;
use tokio_tungstenite::tungstenite::Message;

use crate::helpers::{TestApp, next_json, try_next_json, wait_until};

const QUIET: Duration = Duration::from_millis(300);

#[tokio::test]
async fn test_welcome_on_connect() {
    let app = TestApp::new();
    let server = app.spawn_server().await;
    let mut ws = server.connect().await;

    let welcome = next_json(&mut ws).await;
    assert_eq!(welcome["type"], "connected");
    assert_eq!(welcome["message"], "欢迎连接直播辩论网关");
    assert_eq!(welcome["server"], "live-debate-gateway-v2.0.0");
    assert!(welcome["timestamp"].as_str().expect("ts").ends_with('Z'));

    wait_until(|| app.connection_count() == 1).await;
    let snapshot = app.state.realtime.registry.snapshot();
    assert!(snapshot[0].remote_addr.is_some());
}

#[tokio::test]
async fn test_ping_answered_to_sender_only() {
    let app = TestApp::new();
    let server = app.spawn_server().await;
    let mut a = server.connect_greeted().await;
    let mut b = server.connect_greeted().await;

    a.send(Message::Text(r#"{"type":"ping"}"#.into()))
        .await
        .expect("send");

    let pong = next_json(&mut a).await;
    assert_eq!(pong["type"], "pong");
    assert!(pong["timestamp"].is_string());
    assert!(try_next_json(&mut b, QUIET).await.is_none());
}

#[tokio::test]
async fn test_relay_reaches_everyone_but_sender() {
    let app = TestApp::new();
    let server = app.spawn_server().await;
    let mut a = server.connect_greeted().await;
    let mut b = server.connect_greeted().await;
    let mut c = server.connect_greeted().await;
    wait_until(|| app.connection_count() == 3).await;

    a.send(Message::Text(r#"{"type":"chat","data":"hi"}"#.into()))
        .await
        .expect("send");

    for ws in [&mut b, &mut c] {
        let frame = next_json(ws).await;
        assert_eq!(frame["type"], "broadcast");
        assert_eq!(frame["data"], json!({"type": "chat", "data": "hi"}));
    }

    // The sender's next frame is its own pong, not the relay.
    a.send(Message::Text(r#"{"type":"ping"}"#.into()))
        .await
        .expect("send");
    assert_eq!(next_json(&mut a).await["type"], "pong");
}

#[tokio::test]
async fn test_malformed_frame_gets_error_and_stays_open() {
    let app = TestApp::new();
    let server = app.spawn_server().await;
    let mut a = server.connect_greeted().await;
    let mut b = server.connect_greeted().await;

    a.send(Message::Text("{not json".into())).await.expect("send");
    let err = next_json(&mut a).await;
    assert_eq!(err["type"], "error");
    assert_eq!(err["message"], "消息格式错误");
    assert!(try_next_json(&mut b, QUIET).await.is_none());

    a.send(Message::Binary(vec![0xff, 0x00].into()))
        .await
        .expect("send");
    assert_eq!(next_json(&mut a).await["type"], "error");

    a.send(Message::Text(r#"{"type":"ping"}"#.into()))
        .await
        .expect("send");
    assert_eq!(next_json(&mut a).await["type"], "pong");
}

#[tokio::test]
async fn test_binary_json_is_relayed() {
    let app = TestApp::new();
    let server = app.spawn_server().await;
    let mut a = server.connect_greeted().await;
    let mut b = server.connect_greeted().await;
    wait_until(|| app.connection_count() == 2).await;

    a.send(Message::Binary(br#"[1,2,3]"#.to_vec().into()))
        .await
        .expect("send");
    let frame = next_json(&mut b).await;
    assert_eq!(frame["type"], "broadcast");
    assert_eq!(frame["data"], json!([1, 2, 3]));
}

#[tokio::test]
async fn test_close_unregisters() {
    let app = TestApp::new();
    let server = app.spawn_server().await;
    let mut a = server.connect_greeted().await;
    let _b = server.connect_greeted().await;
    wait_until(|| app.connection_count() == 2).await;

    a.close(None).await.expect("close");
    wait_until(|| app.connection_count() == 1).await;
    assert_eq!(
        app.state.realtime.metrics.snapshot().connections_active,
        1
    );
}

#[tokio::test]
async fn test_live_status_pushed_to_all_clients() {
    let app = TestApp::with_config(|config| {
        config.realtime.live_status_interval_seconds = 1;
        config.realtime.viewers_min = 10;
        config.realtime.viewers_max = 20;
    });
    let server = app.spawn_server().await;
    let mut a = server.connect_greeted().await;
    let mut b = server.connect_greeted().await;

    for ws in [&mut a, &mut b] {
        let frame = try_next_json(ws, Duration::from_secs(3))
            .await
            .expect("liveStatus within the interval");
        assert_eq!(frame["type"], "liveStatus");
        assert_eq!(frame["data"]["isLive"], true);
        let viewers = frame["data"]["viewers"].as_u64().expect("viewers");
        assert!((10..20).contains(&viewers));
    }
}

#[tokio::test]
async fn test_admin_broadcast_reaches_clients() {
    let app = TestApp::new();
    let server = app.spawn_server().await;
    let mut a = server.connect_greeted().await;
    let mut b = server.connect_greeted().await;
    wait_until(|| app.connection_count() == 2).await;

    let (status, _, body) = app
        .post("/api/admin/broadcast", json!({"notice": "下一轮开始"}))
        .await;
    assert!(status.is_success());
    assert_eq!(body["data"]["delivered"], 2);

    for ws in [&mut a, &mut b] {
        let frame = next_json(ws).await;
        assert_eq!(frame["type"], "broadcast");
        assert_eq!(frame["data"]["notice"], "下一轮开始");
    }
}

#[tokio::test]
async fn test_engine_shutdown_closes_client_sockets() {
    let app = TestApp::new();
    let server = app.spawn_server().await;
    let mut a = server.connect_greeted().await;
    let mut b = server.connect_greeted().await;
    wait_until(|| app.connection_count() == 2).await;

    app.state.realtime.shutdown();
    assert_eq!(app.connection_count(), 0);
    assert_eq!(
        app.state.realtime.metrics.snapshot().connections_active,
        0
    );

    for ws in [&mut a, &mut b] {
        let closed = tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                match ws.next().await {
                    Some(Ok(Message::Close(_))) | None | Some(Err(_)) => break,
                    Some(Ok(_)) => continue,
                }
            }
        })
        .await;
        assert!(closed.is_ok(), "client saw the server close");
    }

    // The read loops ending afterwards must not decrement again.
    tokio::time::sleep(QUIET).await;
    assert_eq!(
        app.state.realtime.metrics.snapshot().connections_active,
        0
    );
}
