//! WebSocket transport shim
//!
//! Owns the socket and nothing else: frames are parsed into client events and
//! handed to the coordinator, outbound events are drained from the
//! connection's queue onto the socket. Close and error both end in the
//! disconnect transition.

use axum::extract::ws::{Message as WsMessage, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::connection::ConnectionHandle;
use crate::event::ClientEvent;

use super::listener::AppState;

/// `GET /ws` — upgrade and hand the socket to a connection task
pub(super) async fn ws_handler(
    State(state): State<AppState>,
    upgrade: WebSocketUpgrade,
) -> Response {
    upgrade.on_upgrade(move |socket| handle_socket(state, socket))
}

async fn handle_socket(state: AppState, socket: WebSocket) {
    // Enforce the connection limit before the session exists
    let _permit = match state.try_acquire_slot() {
        Ok(permit) => permit,
        Err(()) => {
            tracing::warn!("Connection rejected: limit reached");
            let mut socket = socket;
            let _ = socket.send(WsMessage::Close(None)).await;
            return;
        }
    };

    let id = state.allocate_connection_id();
    let (outbound_tx, mut outbound_rx) = mpsc::channel(state.config.outbound_capacity);
    let handle = ConnectionHandle::new(id, outbound_tx);

    let coordinator = state.coordinator;
    let mut session = coordinator.on_open(handle).await;

    let (mut sink, mut stream) = socket.split();

    // Write task: drain the outbound queue onto the socket
    let writer = tokio::spawn(async move {
        while let Some(payload) = outbound_rx.recv().await {
            if sink.send(WsMessage::Text(payload.as_ref().clone())).await.is_err() {
                break;
            }
        }
        let _ = sink.close().await;
    });

    // Read loop: one logical event stream per connection
    while let Some(frame) = stream.next().await {
        match frame {
            Ok(WsMessage::Text(text)) => match serde_json::from_str::<ClientEvent>(&text) {
                Ok(event) => coordinator.handle_event(&mut session, event).await,
                Err(e) => {
                    tracing::debug!(
                        connection_id = %id,
                        error = %e,
                        "Unparseable frame dropped"
                    );
                }
            },
            Ok(WsMessage::Close(_)) => break,
            // Pings/pongs are answered by axum; binary frames carry no events
            Ok(_) => {}
            Err(e) => {
                coordinator.on_error(&mut session, e).await;
                break;
            }
        }
    }

    // Idempotent: a no-op when the error path already closed the session
    coordinator.on_disconnect(&mut session).await;
    writer.abort();

    tracing::debug!(connection_id = %id, "Connection task finished");
}
