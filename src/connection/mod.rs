//! Connection identity and per-connection transport handle
//!
//! A [`ConnectionId`] is allocated once per accepted connection and is never
//! reused after the connection closes. The [`ConnectionHandle`] wraps the
//! outbound half of a connection's transport session so the rest of the crate
//! can deliver events without touching the socket directly.

pub mod handle;
pub mod id;

pub use handle::ConnectionHandle;
pub use id::ConnectionId;
