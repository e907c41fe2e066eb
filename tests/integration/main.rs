//! Integration tests driving the full router and a live server.

mod api_test;
mod helpers;
mod ws_test;
