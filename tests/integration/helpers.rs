//! Shared test helpers for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use futures::StreamExt;
use serde_json::Value;
use tempfile::TempDir;
use tokio::net::TcpStream;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tower::ServiceExt;

use gateway_api::{AppState, build_router};
use gateway_core::config::AppConfig;
use gateway_realtime::RealtimeEngine;

pub type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Test application context
pub struct TestApp {
    /// Shared state; every router built from it sees the same engine
    pub state: AppState,
    /// Scratch directory backing `data.directory` and `admin.directory`
    pub dir: TempDir,
}

impl TestApp {
    /// Create a test application with default settings
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    /// Create a test application, adjusting the configuration first
    pub fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = dir.path().join("data");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let mut config = AppConfig::default();
        config.data.directory = data_dir.to_string_lossy().into_owned();
        config.admin.directory = dir.path().join("admin").to_string_lossy().into_owned();
        adjust(&mut config);

        let config = Arc::new(config);
        let engine = Arc::new(RealtimeEngine::new(config.realtime.clone()));
        let state = AppState::new(config, engine);

        Self { state, dir }
    }

    /// Fresh router over the shared state
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Write `{name}.json` into the data directory
    pub fn write_data_file(&self, name: &str, contents: &str) {
        let path = self.dir.path().join("data").join(format!("{name}.json"));
        std::fs::write(path, contents).expect("Failed to write data file");
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, HeaderMap, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("request");
        self.send(request).await
    }

    /// Make a POST request with a JSON body
    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, HeaderMap, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        self.send(request).await
    }

    /// Send a request through a fresh router
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
        let response = self.router().oneshot(request).await.expect("response");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, headers, body)
    }

    /// Serve the router on an ephemeral local port
    pub async fn spawn_server(&self) -> TestServer {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("local addr");
        let app = self.router();

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let ticker = self.state.realtime.spawn_ticker(shutdown_rx.clone());
        let server = tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.changed().await;
            })
            .await
            .expect("server");
        });

        TestServer {
            addr,
            shutdown_tx,
            _server: server,
            _ticker: ticker,
        }
    }

    /// Open connections as seen by the engine
    pub fn connection_count(&self) -> usize {
        self.state.realtime.connection_count()
    }
}

/// A running server; stops when dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown_tx: watch::Sender<bool>,
    _server: JoinHandle<()>,
    _ticker: JoinHandle<()>,
}

impl TestServer {
    /// Connect a WebSocket client to `/ws`
    pub async fn connect(&self) -> WsClient {
        let (ws, _) = connect_async(format!("ws://{}/ws", self.addr))
            .await
            .expect("Failed to connect WebSocket");
        ws
    }

    /// Connect and consume the welcome message
    pub async fn connect_greeted(&self) -> WsClient {
        let mut ws = self.connect().await;
        let welcome = next_json(&mut ws).await;
        assert_eq!(welcome["type"], "connected");
        ws
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}

/// Next text frame as JSON, failing after two seconds
pub async fn next_json(ws: &mut WsClient) -> Value {
    try_next_json(ws, Duration::from_secs(2))
        .await
        .expect("Timed out waiting for a frame")
}

/// Next text frame as JSON, or `None` if nothing arrives within `wait`
pub async fn try_next_json(ws: &mut WsClient, wait: Duration) -> Option<Value> {
    let deadline = tokio::time::Instant::now() + wait;
    loop {
        let msg = tokio::time::timeout_at(deadline, ws.next()).await.ok()??;
        match msg.expect("WebSocket error") {
            Message::Text(text) => {
                return Some(serde_json::from_str(text.as_str()).expect("frame is JSON"));
            }
            Message::Close(_) => return None,
            _ => continue,
        }
    }
}

/// Poll until `check` holds, failing after two seconds
pub async fn wait_until(mut check: impl FnMut() -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while !check() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "Condition not reached in time"
        );
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}
