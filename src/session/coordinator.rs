//! Session coordinator
//!
//! The coordinator owns the per-connection event sequence
//! (register → message* → disconnect) and drives every registry and history
//! mutation plus the broadcast fan-out. Mutation always happens before the
//! corresponding broadcast, so clients never see an event describing state
//! that does not exist yet.
//!
//! No error here is fatal: bad events are dropped and logged, transport
//! errors become the disconnect transition.

use crate::broadcast::Broadcaster;
use crate::connection::ConnectionHandle;
use crate::event::{ClientEvent, ServerEvent};
use crate::history::{Message, MessageLog};
use crate::registry::UserRegistry;
use crate::stats::ServerStats;

use super::state::SessionState;

/// Coordinates session events against the shared registry and history
pub struct Coordinator {
    registry: UserRegistry,
    history: MessageLog,
    broadcaster: Broadcaster,
    stats: ServerStats,
}

impl Coordinator {
    /// Create a coordinator with empty registry, history and fan-out table
    pub fn new() -> Self {
        Self {
            registry: UserRegistry::new(),
            history: MessageLog::new(),
            broadcaster: Broadcaster::new(),
            stats: ServerStats::new(),
        }
    }

    /// The user registry (read-only queries)
    pub fn registry(&self) -> &UserRegistry {
        &self.registry
    }

    /// The message history (read-only queries)
    pub fn history(&self) -> &MessageLog {
        &self.history
    }

    /// The broadcast fan-out table
    pub fn broadcaster(&self) -> &Broadcaster {
        &self.broadcaster
    }

    /// Process-wide counters
    pub fn stats(&self) -> &ServerStats {
        &self.stats
    }

    /// A connection was established
    ///
    /// Adds the handle to the fan-out table (unregistered connections receive
    /// broadcasts too) and returns fresh session state in `Connected`. No
    /// broadcast is produced.
    pub async fn on_open(&self, handle: ConnectionHandle) -> SessionState {
        let id = handle.id;
        self.broadcaster.add(handle).await;
        self.stats.connection_opened();

        tracing::debug!(connection_id = %id, "Connection opened");

        SessionState::new(id)
    }

    /// Dispatch a client event against the session's current phase
    ///
    /// Events arriving after the session closed are no-ops.
    pub async fn handle_event(&self, session: &mut SessionState, event: ClientEvent) {
        if session.is_closed() {
            tracing::debug!(connection_id = %session.id, "Event after close ignored");
            return;
        }

        match event {
            ClientEvent::Register { name } => self.on_register(session, name).await,
            ClientEvent::SendMessage { text } => self.on_send_message(session, text).await,
        }
    }

    /// `Connected → Registered`
    ///
    /// On success broadcasts the updated presence snapshot followed by the
    /// join notice. A duplicate registration drops the event: no broadcast,
    /// logged only.
    async fn on_register(&self, session: &mut SessionState, name: String) {
        match self.registry.register(session.id, name).await {
            Ok(profile) => {
                session.mark_registered();
                self.stats.user_registered();

                let users = self.registry.snapshot().await;
                self.broadcaster.broadcast(&ServerEvent::user_list(users)).await;
                self.broadcaster.broadcast(&ServerEvent::user_joined(profile)).await;
            }
            Err(e) => {
                tracing::warn!(
                    connection_id = %session.id,
                    error = %e,
                    "Registration rejected, event dropped"
                );
            }
        }
    }

    /// `Registered → Registered`
    ///
    /// A sender with no profile is unreachable through the state machine but
    /// handled anyway: the message is silently dropped, no log entry and no
    /// broadcast.
    async fn on_send_message(&self, session: &mut SessionState, text: String) {
        let Some(profile) = self.registry.get(session.id).await else {
            tracing::debug!(
                connection_id = %session.id,
                "Message from unregistered sender dropped"
            );
            return;
        };

        let message = Message::new(session.id, profile.name, text);
        let stored = self.history.append(message).await;
        self.stats.message_relayed();

        self.broadcaster
            .broadcast(&ServerEvent::MessageReceived(stored))
            .await;
    }

    /// `Connected|Registered → Closed`
    ///
    /// Removes the handle from the fan-out table and unregisters the profile.
    /// If a profile was removed, broadcasts the updated presence snapshot
    /// followed by the leave notice. Idempotent.
    pub async fn on_disconnect(&self, session: &mut SessionState) {
        if session.is_closed() {
            return;
        }
        session.close();

        self.broadcaster.remove(session.id).await;
        self.stats.connection_closed();

        if let Some(profile) = self.registry.unregister(session.id).await {
            let users = self.registry.snapshot().await;
            self.broadcaster.broadcast(&ServerEvent::user_list(users)).await;
            self.broadcaster.broadcast(&ServerEvent::user_left(profile)).await;
        } else {
            tracing::debug!(
                connection_id = %session.id,
                duration_ms = session.duration().as_millis() as u64,
                "Unregistered connection closed"
            );
        }
    }

    /// A transport-level error on the connection
    ///
    /// Reported and converted into the disconnect transition, never
    /// propagated as a fatal error.
    pub async fn on_error<E: std::fmt::Display>(&self, session: &mut SessionState, error: E) {
        tracing::warn!(
            connection_id = %session.id,
            error = %error,
            "Transport error, closing session"
        );
        self.on_disconnect(session).await;
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}
