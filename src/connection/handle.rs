//! Per-connection outbound handle

use std::sync::Arc;

use tokio::sync::mpsc;

use super::id::ConnectionId;

/// Outbound handle for one client connection
///
/// Holds the sending half of the connection's bounded outbound channel. The
/// WebSocket write task owns the receiving half and forwards everything to the
/// socket. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ConnectionHandle {
    /// Unique connection id
    pub id: ConnectionId,

    /// Sender to the connection's write task
    tx: mpsc::Sender<Arc<String>>,
}

impl ConnectionHandle {
    /// Create a new handle
    pub fn new(id: ConnectionId, tx: mpsc::Sender<Arc<String>>) -> Self {
        Self { id, tx }
    }

    /// Deliver a serialized event to this connection without blocking
    ///
    /// Returns `false` if the outbound channel is full or closed. Delivery is
    /// best-effort: the caller skips this connection and moves on.
    pub fn send(&self, payload: Arc<String>) -> bool {
        self.tx.try_send(payload).is_ok()
    }

    /// Whether the connection's write task has gone away
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_handle(capacity: usize) -> (ConnectionHandle, mpsc::Receiver<Arc<String>>) {
        let (tx, rx) = mpsc::channel(capacity);
        (ConnectionHandle::new(ConnectionId::new(1), tx), rx)
    }

    #[tokio::test]
    async fn test_send_delivers_payload() {
        let (handle, mut rx) = make_handle(8);

        assert!(handle.send(Arc::new("hello".to_string())));

        let received = rx.recv().await.unwrap();
        assert_eq!(&*received, "hello");
    }

    #[tokio::test]
    async fn test_send_to_full_channel_returns_false() {
        let (handle, _rx) = make_handle(1);

        assert!(handle.send(Arc::new("first".to_string())));
        assert!(!handle.send(Arc::new("second".to_string())));
    }

    #[tokio::test]
    async fn test_send_to_closed_channel_returns_false() {
        let (handle, rx) = make_handle(8);
        drop(rx);

        assert!(handle.is_closed());
        assert!(!handle.send(Arc::new("late".to_string())));
    }
}
