//! # gateway-api
//!
//! HTTP API layer for the live debate gateway built on Axum.
//!
//! Provides the mock REST endpoints, the `/ws` upgrade, static admin
//! serving, middleware (CORS, gateway and security headers, logging),
//! DTOs, extractors, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
