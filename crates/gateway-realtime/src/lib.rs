//! # gateway-realtime
//!
//! Real-time WebSocket engine for the live debate gateway. Provides:
//!
//! - A concurrent registry of open connections
//! - Control message dispatch (`ping`, `subscribe`) and relay of every
//!   other JSON payload to the remaining clients
//! - A cancellable ticker pushing `liveStatus` updates to all clients

pub mod broadcaster;
pub mod connection;
pub mod message;
pub mod metrics;
pub mod server;
pub mod ticker;

pub use broadcaster::NotificationBroadcaster;
pub use connection::registry::ConnectionRegistry;
pub use connection::{ConnectionHandle, ConnectionId};
pub use message::types::{InboundMessage, OutboundMessage};
pub use server::RealtimeEngine;
pub use ticker::LiveStatusTicker;
