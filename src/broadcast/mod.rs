//! Event fan-out to connected clients
//!
//! The broadcaster keeps a handle for every connection the transport layer
//! currently knows about, registered or not, and delivers each event to all
//! of them. An event is serialized once and shared across the fan-out;
//! per-connection delivery is bounded and best-effort so one slow client can
//! never stall the rest of the server.

pub mod fanout;

pub use fanout::Broadcaster;
