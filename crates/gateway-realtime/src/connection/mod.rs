//! WebSocket connection management: handles and the registry.

pub mod handle;
pub mod registry;

pub use handle::{ConnectionHandle, ConnectionId, SendError};
pub use registry::{ConnectionRegistry, Visit};
