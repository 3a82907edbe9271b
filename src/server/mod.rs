//! WebSocket transport and query endpoints
//!
//! Everything here is an I/O wrapper around the core: the WebSocket shim
//! feeds boundary events to the [`Coordinator`](crate::session::Coordinator),
//! and the query routes serve registry and history snapshots.

pub mod config;
pub mod listener;
mod routes;
mod ws;

pub use config::ServerConfig;
pub use listener::ChatServer;
