//! Top-level real-time engine that ties together all subsystems.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::info;

use gateway_core::config::RealtimeConfig;

use crate::broadcaster::{InboundOutcome, NotificationBroadcaster};
use crate::connection::handle::{ConnectionHandle, ConnectionId};
use crate::connection::registry::ConnectionRegistry;
use crate::metrics::RealtimeMetrics;
use crate::ticker::LiveStatusTicker;

/// Central real-time engine handed to the HTTP layer and the ticker.
#[derive(Debug, Clone)]
pub struct RealtimeEngine {
    /// Open connections.
    pub registry: Arc<ConnectionRegistry>,
    /// Envelope construction and fan-out.
    pub broadcaster: Arc<NotificationBroadcaster>,
    /// Metrics collector.
    pub metrics: Arc<RealtimeMetrics>,
    /// Configuration.
    config: RealtimeConfig,
}

impl RealtimeEngine {
    /// Creates a new real-time engine with all subsystems.
    pub fn new(config: RealtimeConfig) -> Self {
        let registry = Arc::new(ConnectionRegistry::new());
        let metrics = Arc::new(RealtimeMetrics::new());
        let server_id = format!("{}-v{}", config.server_name, env!("CARGO_PKG_VERSION"));
        let broadcaster = Arc::new(NotificationBroadcaster::new(
            registry.clone(),
            metrics.clone(),
            config.viewers_min..config.viewers_max,
            server_id,
        ));

        info!("Real-time engine initialized");

        Self {
            registry,
            broadcaster,
            metrics,
            config,
        }
    }

    /// Greets an accepted connection, then registers it.
    ///
    /// The welcome is queued before the handle becomes visible to fan-out,
    /// so `connected` is always the first frame a client reads. Returns the
    /// handle and the receiver its socket writer drains.
    pub fn connect(
        &self,
        remote_addr: Option<SocketAddr>,
    ) -> (Arc<ConnectionHandle>, mpsc::Receiver<String>) {
        let (handle, rx) = ConnectionHandle::new(remote_addr, self.config.channel_buffer_size);
        let handle = Arc::new(handle);

        self.metrics.connection_opened();
        self.broadcaster.greet(&handle);
        self.registry.register(handle.clone());

        info!(
            conn_id = %handle.id,
            remote = %handle.peer_label(),
            "WebSocket client connected"
        );

        (handle, rx)
    }

    /// Processes one text frame from `handle`.
    pub fn receive(&self, handle: &Arc<ConnectionHandle>, raw: &str) -> InboundOutcome {
        self.broadcaster.handle_inbound(handle, raw)
    }

    /// Processes one binary frame from `handle` as UTF-8 text.
    pub fn receive_binary(&self, handle: &Arc<ConnectionHandle>, data: &[u8]) -> InboundOutcome {
        self.broadcaster.handle_inbound_bytes(handle, data)
    }

    /// Removes a connection on close or error.
    pub fn disconnect(&self, conn_id: &ConnectionId) {
        if self.broadcaster.drop_connection(conn_id) {
            info!(conn_id = %conn_id, "WebSocket client disconnected");
        }
    }

    /// Spawns the live status ticker; it stops when `cancel` turns `true`.
    pub fn spawn_ticker(&self, cancel: watch::Receiver<bool>) -> JoinHandle<()> {
        LiveStatusTicker::new(self.broadcaster.clone(), self.config.live_status_interval())
            .spawn(cancel)
    }

    /// Number of open connections.
    pub fn connection_count(&self) -> usize {
        self.registry.len()
    }

    /// Closes every connection. Writers parked on
    /// [`ConnectionHandle::closed`] wake and send a close frame.
    pub fn shutdown(&self) {
        let closed = self.registry.close_all();
        for _ in 0..closed {
            self.metrics.connection_closed();
        }
        info!(count = closed, "Real-time engine shut down");
    }
}
