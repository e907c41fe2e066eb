//! Notification broadcaster: dispatches inbound frames and fans
//! envelopes out to the registry.

use std::ops::Range;
use std::sync::Arc;

use rand::Rng;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::connection::handle::{ConnectionHandle, ConnectionId, SendError};
use crate::connection::registry::ConnectionRegistry;
use crate::message::builder;
use crate::message::types::{InboundMessage, OutboundMessage};
use crate::metrics::RealtimeMetrics;

/// What the broadcaster did with one inbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundOutcome {
    /// Answered a `ping` on the sender's connection.
    Ponged,
    /// Logged a `subscribe` request.
    Subscribed {
        /// Channel named in the request, `all` when absent.
        channel: String,
    },
    /// Relayed the payload to this many other connections.
    Relayed(usize),
    /// Frame was not JSON; the sender received an `error`.
    Rejected,
}

/// Builds envelopes and delivers them to open connections.
#[derive(Debug)]
pub struct NotificationBroadcaster {
    registry: Arc<ConnectionRegistry>,
    metrics: Arc<RealtimeMetrics>,
    /// Range the synthetic viewer count is drawn from.
    viewers: Range<u64>,
    /// Identifier announced in the welcome message.
    server_id: String,
}

impl NotificationBroadcaster {
    /// Creates a broadcaster over `registry`.
    pub fn new(
        registry: Arc<ConnectionRegistry>,
        metrics: Arc<RealtimeMetrics>,
        viewers: Range<u64>,
        server_id: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            metrics,
            viewers,
            server_id: server_id.into(),
        }
    }

    /// Sends the welcome message to a freshly accepted connection.
    pub fn greet(&self, handle: &Arc<ConnectionHandle>) -> bool {
        self.send_direct(handle, &builder::build_connected(&self.server_id))
    }

    /// Processes one text frame received on `from`.
    pub fn handle_inbound(&self, from: &Arc<ConnectionHandle>, raw: &str) -> InboundOutcome {
        self.metrics.message_received();

        let msg = match InboundMessage::decode(raw) {
            Ok(msg) => msg,
            Err(e) => {
                warn!(conn_id = %from.id, error = %e, "Failed to parse WebSocket message");
                self.send_direct(from, &builder::build_malformed_error());
                return InboundOutcome::Rejected;
            }
        };

        match msg {
            InboundMessage::Ping => {
                self.send_direct(from, &builder::build_pong());
                InboundOutcome::Ponged
            }
            InboundMessage::Subscribe { channel } => {
                let channel = channel.unwrap_or_else(|| "all".to_string());
                info!(conn_id = %from.id, channel = %channel, "Client subscribed");
                InboundOutcome::Subscribed { channel }
            }
            InboundMessage::Relay(payload) => {
                debug!(conn_id = %from.id, payload = %payload, "Relaying WebSocket message");
                InboundOutcome::Relayed(self.relay(from.id, payload))
            }
        }
    }

    /// Processes a binary frame. Payloads that are not UTF-8 get the same
    /// `error` reply as malformed JSON.
    pub fn handle_inbound_bytes(&self, from: &Arc<ConnectionHandle>, data: &[u8]) -> InboundOutcome {
        match std::str::from_utf8(data) {
            Ok(text) => self.handle_inbound(from, text),
            Err(e) => {
                self.metrics.message_received();
                warn!(conn_id = %from.id, error = %e, "Binary WebSocket frame is not UTF-8");
                self.send_direct(from, &builder::build_malformed_error());
                InboundOutcome::Rejected
            }
        }
    }

    /// Wraps `payload` in a `broadcast` envelope for every connection
    /// except `sender`. Returns the number of connections reached.
    pub fn relay(&self, sender: ConnectionId, payload: Value) -> usize {
        self.fan_out(&builder::build_broadcast(payload), Some(sender))
    }

    /// Sends `message` to every open connection.
    pub fn broadcast_all(&self, message: &OutboundMessage) -> usize {
        self.fan_out(message, None)
    }

    /// Pushes a `liveStatus` envelope with a fresh viewer count to every
    /// open connection.
    pub fn publish_live_status(&self) -> usize {
        let viewers = self.sample_viewers();
        let delivered = self.broadcast_all(&builder::build_live_status(viewers));
        debug!(viewers, delivered, "Published live status");
        delivered
    }

    /// Draws a viewer count from the configured range.
    pub fn sample_viewers(&self) -> u64 {
        if self.viewers.is_empty() {
            return self.viewers.start;
        }
        rand::rng().random_range(self.viewers.clone())
    }

    /// Sends `message` to a single connection.
    pub fn send_direct(&self, handle: &Arc<ConnectionHandle>, message: &OutboundMessage) -> bool {
        match message.to_frame() {
            Ok(frame) => self.deliver(handle, frame),
            Err(e) => {
                error!(error = %e, kind = message.kind(), "Failed to serialize outbound message");
                false
            }
        }
    }

    /// Removes a connection from the registry, once.
    pub fn drop_connection(&self, conn_id: &ConnectionId) -> bool {
        if self.registry.unregister(conn_id).is_some() {
            self.metrics.connection_closed();
            true
        } else {
            false
        }
    }

    fn fan_out(&self, message: &OutboundMessage, exclude: Option<ConnectionId>) -> usize {
        let frame = match message.to_frame() {
            Ok(frame) => frame,
            Err(e) => {
                error!(error = %e, kind = message.kind(), "Failed to serialize broadcast message");
                return 0;
            }
        };

        let mut delivered = 0;
        let visit = self.registry.for_each_open(|handle| {
            if Some(handle.id) == exclude {
                return;
            }
            if self.deliver(handle, frame.clone()) {
                delivered += 1;
            }
        });
        for _ in 0..visit.evicted {
            self.metrics.connection_closed();
        }

        self.metrics.broadcast();
        delivered
    }

    fn deliver(&self, handle: &Arc<ConnectionHandle>, frame: String) -> bool {
        match handle.send(frame) {
            Ok(()) => {
                self.metrics.messages_sent(1);
                true
            }
            Err(SendError::Full) => {
                self.metrics.send_failed();
                warn!(conn_id = %handle.id, "Connection send buffer full, dropping message");
                false
            }
            Err(SendError::Closed) => {
                self.metrics.send_failed();
                debug!(conn_id = %handle.id, "Send to closed connection, dropping it");
                self.drop_connection(&handle.id);
                false
            }
        }
    }
}
