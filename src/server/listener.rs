//! Chat server listener
//!
//! Binds the listening socket and serves the WebSocket endpoint plus the
//! read-only query routes.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::connection::ConnectionId;
use crate::error::Result;
use crate::server::config::ServerConfig;
use crate::server::routes;
use crate::session::Coordinator;

/// Shared state handed to every route handler
#[derive(Clone)]
pub(super) struct AppState {
    pub(super) config: ServerConfig,
    pub(super) coordinator: Arc<Coordinator>,
    next_connection_id: Arc<AtomicU64>,
    connection_semaphore: Option<Arc<Semaphore>>,
}

impl AppState {
    pub(super) fn new(config: ServerConfig) -> Self {
        let connection_semaphore = if config.max_connections > 0 {
            Some(Arc::new(Semaphore::new(config.max_connections)))
        } else {
            None
        };

        Self {
            config,
            coordinator: Arc::new(Coordinator::new()),
            next_connection_id: Arc::new(AtomicU64::new(1)),
            connection_semaphore,
        }
    }

    /// Allocate a fresh connection id
    ///
    /// The counter only moves forward: a closed connection's id is never
    /// handed out again.
    pub(super) fn allocate_connection_id(&self) -> ConnectionId {
        ConnectionId::new(self.next_connection_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Try to claim a connection slot
    ///
    /// `Ok(None)` means no limit is configured; `Err` means the limit is
    /// reached and the connection must be rejected.
    pub(super) fn try_acquire_slot(&self) -> std::result::Result<Option<OwnedSemaphorePermit>, ()> {
        match self.connection_semaphore {
            Some(ref sem) => match sem.clone().try_acquire_owned() {
                Ok(permit) => Ok(Some(permit)),
                Err(_) => Err(()),
            },
            None => Ok(None),
        }
    }
}

/// Chat server
///
/// Owns the shared coordinator and serves `/ws` plus the query endpoints.
pub struct ChatServer {
    state: AppState,
}

impl ChatServer {
    /// Create a new server with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    /// Get a reference to the session coordinator
    ///
    /// Useful for embedding: the coordinator exposes registry and history
    /// snapshots and the server counters.
    pub fn coordinator(&self) -> &Arc<Coordinator> {
        &self.state.coordinator
    }

    /// Get the bind address
    pub fn bind_addr(&self) -> SocketAddr {
        self.state.config.bind_addr
    }

    /// Run the server
    ///
    /// This method blocks until the server is shut down.
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(self.state.config.bind_addr).await?;
        tracing::info!(addr = %self.state.config.bind_addr, "Chat server listening");

        axum::serve(listener, routes::router(self.state.clone())).await?;
        Ok(())
    }

    /// Run the server with graceful shutdown
    pub async fn run_until<F>(&self, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.state.config.bind_addr).await?;
        tracing::info!(addr = %self.state.config.bind_addr, "Chat server listening");

        axum::serve(listener, routes::router(self.state.clone()))
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Shutdown complete");
        Ok(())
    }
}
