//! Session state machine
//!
//! Tracks the state of one connection from transport open to disconnection.

use std::time::Instant;

use crate::connection::ConnectionId;

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Transport open, no display name registered
    Connected,
    /// Profile present in the registry
    Registered,
    /// Terminal; no further events are processed
    Closed,
}

/// Per-connection session state
///
/// Owned by the connection's task. Phase transitions are driven by the
/// coordinator; the registry remains the source of truth for presence.
#[derive(Debug)]
pub struct SessionState {
    /// The connection's unique id
    pub id: ConnectionId,

    /// Current phase
    pub phase: SessionPhase,

    /// Connection start time
    pub connected_at: Instant,
}

impl SessionState {
    /// Create state for a freshly opened connection
    pub fn new(id: ConnectionId) -> Self {
        Self {
            id,
            phase: SessionPhase::Connected,
            connected_at: Instant::now(),
        }
    }

    /// Transition to `Registered` after a successful registry insert
    pub fn mark_registered(&mut self) {
        if self.phase == SessionPhase::Connected {
            self.phase = SessionPhase::Registered;
        }
    }

    /// Transition to the terminal `Closed` phase
    pub fn close(&mut self) {
        self.phase = SessionPhase::Closed;
    }

    /// Whether a profile has been registered for this session
    pub fn is_registered(&self) -> bool {
        self.phase == SessionPhase::Registered
    }

    /// Whether the session has been closed
    pub fn is_closed(&self) -> bool {
        self.phase == SessionPhase::Closed
    }

    /// Session duration so far
    pub fn duration(&self) -> std::time::Duration {
        self.connected_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let mut state = SessionState::new(ConnectionId::new(1));

        assert_eq!(state.phase, SessionPhase::Connected);
        assert!(!state.is_registered());

        state.mark_registered();
        assert_eq!(state.phase, SessionPhase::Registered);
        assert!(state.is_registered());

        state.close();
        assert_eq!(state.phase, SessionPhase::Closed);
        assert!(state.is_closed());
    }

    #[test]
    fn test_close_without_registering() {
        let mut state = SessionState::new(ConnectionId::new(1));

        state.close();
        assert!(state.is_closed());
        assert!(!state.is_registered());
    }

    #[test]
    fn test_mark_registered_after_close_is_ignored() {
        let mut state = SessionState::new(ConnectionId::new(1));

        state.close();
        state.mark_registered();
        assert!(state.is_closed());
    }
}
