//! Connection registry tracking every open WebSocket connection.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use super::handle::{ConnectionHandle, ConnectionId, ConnectionInfo};

/// Outcome of one [`ConnectionRegistry::for_each_open`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visit {
    /// Open connections handed to the callback.
    pub visited: usize,
    /// Dead connections this pass removed from the registry.
    pub evicted: usize,
}

/// Thread-safe set of all open WebSocket connections.
///
/// Accept, close and timer events mutate or read the registry from
/// independent tasks, so it is backed by a sharded concurrent map.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    /// Connection ID → connection handle.
    by_id: DashMap<ConnectionId, Arc<ConnectionHandle>>,
}

impl ConnectionRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            by_id: DashMap::new(),
        }
    }

    /// Adds a newly accepted connection.
    pub fn register(&self, handle: Arc<ConnectionHandle>) {
        debug!(conn_id = %handle.id, "Connection registered");
        self.by_id.insert(handle.id, handle);
    }

    /// Removes a connection and marks it closed. No-op if already absent.
    pub fn unregister(&self, conn_id: &ConnectionId) -> Option<Arc<ConnectionHandle>> {
        let (_, handle) = self.by_id.remove(conn_id)?;
        handle.mark_closed();
        debug!(conn_id = %conn_id, "Connection unregistered");
        Some(handle)
    }

    /// Applies `f` to every connection currently believed open.
    ///
    /// Runs over a snapshot, so `f` may register or unregister
    /// connections. A connection that closes before its turn, including
    /// one removed by an earlier call to `f`, is skipped. Connections still
    /// registered but whose outbound channel is gone are unregistered on
    /// the way.
    pub fn for_each_open<F>(&self, mut f: F) -> Visit
    where
        F: FnMut(&Arc<ConnectionHandle>),
    {
        let mut visit = Visit::default();
        for handle in self.all_connections() {
            if !handle.is_alive() {
                if self.unregister(&handle.id).is_some() {
                    debug!(conn_id = %handle.id, "Evicted connection with a closed channel");
                    visit.evicted += 1;
                }
                continue;
            }
            f(&handle);
            visit.visited += 1;
        }
        visit
    }

    /// Gets a specific connection by ID.
    pub fn get(&self, conn_id: &ConnectionId) -> Option<Arc<ConnectionHandle>> {
        self.by_id.get(conn_id).map(|entry| entry.value().clone())
    }

    /// Whether a connection is currently registered.
    pub fn contains(&self, conn_id: &ConnectionId) -> bool {
        self.by_id.contains_key(conn_id)
    }

    /// Returns total number of registered connections.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether no connection is registered.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Returns all connection handles.
    pub fn all_connections(&self) -> Vec<Arc<ConnectionHandle>> {
        self.by_id
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Serializable view of every registered connection.
    pub fn snapshot(&self) -> Vec<ConnectionInfo> {
        self.by_id.iter().map(|entry| entry.value().info()).collect()
    }

    /// Removes and closes every connection. Returns how many this call
    /// removed; entries unregistered concurrently are not counted.
    pub fn close_all(&self) -> usize {
        self.all_connections()
            .iter()
            .filter(|handle| self.unregister(&handle.id).is_some())
            .count()
    }
}
