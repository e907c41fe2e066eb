//! # gateway-mock
//!
//! Fixed fixtures for the debate platform REST surface. Nothing here is
//! computed or stored; every call rebuilds the literal with fresh
//! timestamps.

pub mod models;
pub mod provider;

pub use provider::MockDataProvider;
