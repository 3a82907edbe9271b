//! Broadcaster implementation

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::connection::{ConnectionHandle, ConnectionId};
use crate::event::ServerEvent;

/// Delivers events to every currently known connection
///
/// Connections are added on transport open and removed on disconnect, so the
/// table always mirrors the set of live sockets. Unregistered connections are
/// included by design.
pub struct Broadcaster {
    /// Connected clients indexed by connection id
    connections: RwLock<HashMap<ConnectionId, ConnectionHandle>>,
}

impl Broadcaster {
    /// Create a new broadcaster with no connections
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Add a connection to the fan-out table
    pub async fn add(&self, handle: ConnectionHandle) {
        let mut connections = self.connections.write().await;
        connections.insert(handle.id, handle);
    }

    /// Remove a connection from the fan-out table
    pub async fn remove(&self, id: ConnectionId) {
        let mut connections = self.connections.write().await;
        connections.remove(&id);
    }

    /// Broadcast an event to every known connection
    ///
    /// The event is serialized once; all handles share the allocation. A
    /// failed delivery (full or closed outbound channel) is logged and
    /// skipped, it never aborts the loop or blocks the caller.
    pub async fn broadcast(&self, event: &ServerEvent) {
        let payload = match serde_json::to_string(event) {
            Ok(json) => Arc::new(json),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize broadcast event");
                return;
            }
        };

        let connections = self.connections.read().await;

        tracing::debug!(
            recipients = connections.len(),
            bytes = payload.len(),
            "Broadcasting event"
        );

        for handle in connections.values() {
            if !handle.send(Arc::clone(&payload)) {
                tracing::warn!(
                    connection_id = %handle.id,
                    "Failed to deliver event, skipping connection"
                );
            }
        }
    }

    /// Number of connections currently known to the transport layer
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn make_handle(id: u64, capacity: usize) -> (ConnectionHandle, mpsc::Receiver<Arc<String>>) {
        let (tx, rx) = mpsc::channel(capacity);
        (ConnectionHandle::new(ConnectionId::new(id), tx), rx)
    }

    fn user_list_event() -> ServerEvent {
        ServerEvent::user_list(Vec::new())
    }

    #[tokio::test]
    async fn test_add_and_remove() {
        let broadcaster = Broadcaster::new();
        let (handle, _rx) = make_handle(1, 8);

        broadcaster.add(handle).await;
        assert_eq!(broadcaster.connection_count().await, 1);

        broadcaster.remove(ConnectionId::new(1)).await;
        assert_eq!(broadcaster.connection_count().await, 0);
    }

    #[tokio::test]
    async fn test_remove_unknown_is_noop() {
        let broadcaster = Broadcaster::new();
        broadcaster.remove(ConnectionId::new(42)).await;
        assert_eq!(broadcaster.connection_count().await, 0);
    }

    #[tokio::test]
    async fn test_broadcast_reaches_every_connection() {
        let broadcaster = Broadcaster::new();
        let (h1, mut rx1) = make_handle(1, 8);
        let (h2, mut rx2) = make_handle(2, 8);
        broadcaster.add(h1).await;
        broadcaster.add(h2).await;

        broadcaster.broadcast(&user_list_event()).await;

        let payload1 = rx1.try_recv().unwrap();
        let payload2 = rx2.try_recv().unwrap();
        assert_eq!(payload1, payload2);

        let json: serde_json::Value = serde_json::from_str(&payload1).unwrap();
        assert_eq!(json["event"], "userList");
    }

    #[tokio::test]
    async fn test_failed_delivery_does_not_abort_fanout() {
        let broadcaster = Broadcaster::new();

        // A connection whose write task is gone
        let (dead, dead_rx) = make_handle(1, 8);
        drop(dead_rx);
        let (alive, mut alive_rx) = make_handle(2, 8);

        broadcaster.add(dead).await;
        broadcaster.add(alive).await;

        broadcaster.broadcast(&user_list_event()).await;

        // The healthy connection still receives the event
        assert!(alive_rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_full_channel_is_skipped() {
        let broadcaster = Broadcaster::new();
        let (slow, mut slow_rx) = make_handle(1, 1);
        broadcaster.add(slow).await;

        broadcaster.broadcast(&user_list_event()).await;
        broadcaster.broadcast(&user_list_event()).await;

        // Only the first event fit; the second was dropped, not queued
        assert!(slow_rx.try_recv().is_ok());
        assert!(slow_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_broadcast_to_nobody() {
        let broadcaster = Broadcaster::new();
        broadcaster.broadcast(&user_list_event()).await;
    }
}
