//! WebSocket message types: inbound classification, outbound envelopes,
//! and builder helpers.

pub mod builder;
pub mod timestamp;
pub mod types;

pub use types::{InboundMessage, LiveStatusData, OutboundMessage};
