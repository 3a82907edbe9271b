//! Process-wide counters for connections, registrations and messages

use std::sync::atomic::{AtomicU64, Ordering};

/// Server-wide statistics
///
/// Updated by the coordinator as events flow through; cheap relaxed atomics
/// since the counters carry no synchronization duties.
#[derive(Debug, Default)]
pub struct ServerStats {
    /// Total connections ever accepted
    total_connections: AtomicU64,
    /// Currently open connections
    active_connections: AtomicU64,
    /// Successful registrations
    registrations: AtomicU64,
    /// Messages appended and broadcast
    messages_relayed: AtomicU64,
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Total connections ever accepted
    pub total_connections: u64,
    /// Currently open connections
    pub active_connections: u64,
    /// Successful registrations
    pub registrations: u64,
    /// Messages appended and broadcast
    pub messages_relayed: u64,
}

impl ServerStats {
    /// Create zeroed stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted connection
    pub fn connection_opened(&self) {
        self.total_connections.fetch_add(1, Ordering::Relaxed);
        self.active_connections.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a closed connection
    pub fn connection_closed(&self) {
        // Saturating: a spurious double-close must not wrap the counter
        let _ = self
            .active_connections
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1));
    }

    /// Record a successful registration
    pub fn user_registered(&self) {
        self.registrations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a relayed message
    pub fn message_relayed(&self) {
        self.messages_relayed.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time copy of all counters
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total_connections: self.total_connections.load(Ordering::Relaxed),
            active_connections: self.active_connections.load(Ordering::Relaxed),
            registrations: self.registrations.load(Ordering::Relaxed),
            messages_relayed: self.messages_relayed.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_zero() {
        let snapshot = ServerStats::new().snapshot();

        assert_eq!(snapshot.total_connections, 0);
        assert_eq!(snapshot.active_connections, 0);
        assert_eq!(snapshot.registrations, 0);
        assert_eq!(snapshot.messages_relayed, 0);
    }

    #[test]
    fn test_connection_lifecycle_counters() {
        let stats = ServerStats::new();

        stats.connection_opened();
        stats.connection_opened();
        stats.connection_closed();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.total_connections, 2);
        assert_eq!(snapshot.active_connections, 1);
    }

    #[test]
    fn test_close_never_underflows() {
        let stats = ServerStats::new();

        stats.connection_closed();

        assert_eq!(stats.snapshot().active_connections, 0);
    }

    #[test]
    fn test_registration_and_message_counters() {
        let stats = ServerStats::new();

        stats.user_registered();
        stats.message_relayed();
        stats.message_relayed();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.registrations, 1);
        assert_eq!(snapshot.messages_relayed, 2);
    }
}
