//! HTTP request handlers.

pub mod admin;
pub mod content;
pub mod data;
pub mod debate;
pub mod fallback;
pub mod health;
pub mod stream;
pub mod vote;
pub mod ws;
