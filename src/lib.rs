//! # chat-rs
//!
//! Real-time chat server library with presence tracking and message
//! broadcast.
//!
//! Clients connect over WebSocket, register a display name, and exchange
//! short text messages; everyone connected is notified of peers joining and
//! leaving. Presence and history are held in memory for the lifetime of the
//! process and exposed through read-only query endpoints.
//!
//! # Architecture
//!
//! ```text
//!   WebSocket clients                 HTTP queries
//!         │                                │
//!         ▼                                ▼
//!   server::ws  ──► session::Coordinator ──► registry::UserRegistry
//!                        │        │            history::MessageLog
//!                        ▼        ▼
//!              broadcast::Broadcaster ──► every ConnectionHandle
//! ```
//!
//! The coordinator is the single decision point: it validates each client
//! event against the session's state, mutates the registry or the message
//! log, and only then fans the resulting event out to all connections.
//! Delivery is best-effort per connection; a slow client drops events instead
//! of stalling the others.
//!
//! # Example
//!
//! ```no_run
//! use chat_rs::{ChatServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> chat_rs::Result<()> {
//!     let config = ServerConfig::default().max_connections(1000);
//!     let server = ChatServer::new(config);
//!     server.run().await
//! }
//! ```

pub mod broadcast;
pub mod connection;
pub mod error;
pub mod event;
pub mod history;
pub mod registry;
pub mod server;
pub mod session;
pub mod stats;

pub use broadcast::Broadcaster;
pub use connection::{ConnectionHandle, ConnectionId};
pub use error::{Error, Result};
pub use event::{ClientEvent, ServerEvent};
pub use history::{Message, MessageLog};
pub use registry::{RegistryError, UserProfile, UserRegistry};
pub use server::{ChatServer, ServerConfig};
pub use session::{Coordinator, SessionPhase, SessionState};
pub use stats::{ServerStats, StatsSnapshot};
