//! Wire event types
//!
//! All traffic between clients and the server is JSON text frames with an
//! `{"event": ..., "data": ...}` envelope. Inbound frames parse into
//! [`ClientEvent`]; everything the server fans out is a [`ServerEvent`].

pub mod inbound;
pub mod outbound;

pub use inbound::ClientEvent;
pub use outbound::ServerEvent;
