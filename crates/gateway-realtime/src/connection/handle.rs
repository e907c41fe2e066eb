//! Individual WebSocket connection handle.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::{Notify, mpsc};
use uuid::Uuid;

/// Unique connection identifier
pub type ConnectionId = Uuid;

/// Why an outbound frame could not be queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendError {
    /// The connection is closed or its writer task has gone away.
    #[error("connection closed")]
    Closed,
    /// The outbound queue is at capacity; the frame was dropped.
    #[error("outbound buffer full")]
    Full,
}

/// A handle to a single WebSocket connection.
///
/// Holds the sender half of the connection's outbound queue. The socket
/// writer task owns the receiver and forwards each frame to the client.
#[derive(Debug)]
pub struct ConnectionHandle {
    /// Unique connection ID
    pub id: ConnectionId,
    /// Peer address, when the transport exposes it
    pub remote_addr: Option<SocketAddr>,
    /// Sender for serialized outbound frames
    sender: mpsc::Sender<String>,
    /// When the connection was established
    pub connected_at: DateTime<Utc>,
    /// Whether the connection is still open
    alive: AtomicBool,
    /// Wakes tasks parked in [`ConnectionHandle::closed`]
    close_notify: Notify,
}

impl ConnectionHandle {
    /// Create a new connection handle and the receiver its writer drains.
    pub fn new(
        remote_addr: Option<SocketAddr>,
        buffer_size: usize,
    ) -> (Self, mpsc::Receiver<String>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let handle = Self {
            id: Uuid::new_v4(),
            remote_addr,
            sender,
            connected_at: Utc::now(),
            alive: AtomicBool::new(true),
            close_notify: Notify::new(),
        };
        (handle, receiver)
    }

    /// Queue a serialized frame for this connection without waiting.
    pub fn send(&self, frame: String) -> Result<(), SendError> {
        if !self.is_alive() {
            return Err(SendError::Closed);
        }
        match self.sender.try_send(frame) {
            Ok(()) => Ok(()),
            Err(mpsc::error::TrySendError::Full(_)) => Err(SendError::Full),
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.mark_closed();
                Err(SendError::Closed)
            }
        }
    }

    /// Check if connection is alive
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst) && !self.sender.is_closed()
    }

    /// Mark connection as closed and wake anyone waiting on [`Self::closed`]
    pub fn mark_closed(&self) {
        self.alive.store(false, Ordering::SeqCst);
        self.close_notify.notify_waiters();
    }

    /// Resolves once the connection has been marked closed.
    ///
    /// The socket writer selects on this so a server-side close reaches the
    /// client even while no frames are queued.
    pub async fn closed(&self) {
        loop {
            let notified = self.close_notify.notified();
            if !self.alive.load(Ordering::SeqCst) {
                return;
            }
            notified.await;
        }
    }

    /// Label used in log lines: the peer address or the connection id.
    pub fn peer_label(&self) -> String {
        match self.remote_addr {
            Some(addr) => addr.to_string(),
            None => self.id.to_string(),
        }
    }

    /// Get a snapshot of connection info
    pub fn info(&self) -> ConnectionInfo {
        ConnectionInfo {
            id: self.id,
            remote_addr: self.remote_addr.map(|a| a.to_string()),
            connected_at: self.connected_at,
            alive: self.is_alive(),
        }
    }
}

/// Snapshot of connection info (serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    /// Connection ID
    pub id: ConnectionId,
    /// Peer address
    pub remote_addr: Option<String>,
    /// Connected at
    pub connected_at: DateTime<Utc>,
    /// Is alive
    pub alive: bool,
}
