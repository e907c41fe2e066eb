//! Gateway marker headers and browser security headers.

use axum::extract::Request;
use axum::http::header::{CACHE_CONTROL, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS};
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

use crate::dto::response::SERVICE_NAME;

pub const GATEWAY_VERSION: HeaderName = HeaderName::from_static("x-gateway-version");
pub const PROCESSED_BY: HeaderName = HeaderName::from_static("x-processed-by");
const DNS_PREFETCH_CONTROL: HeaderName = HeaderName::from_static("x-dns-prefetch-control");
const CROSS_ORIGIN_OPENER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-opener-policy");

/// `Cache-Control` applied to every `/api` response.
pub const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

/// Stamps `/api` responses with the gateway version and disables caching.
pub async fn gateway_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        GATEWAY_VERSION,
        HeaderValue::from_static(env!("CARGO_PKG_VERSION")),
    );
    headers.insert(PROCESSED_BY, HeaderValue::from_static(SERVICE_NAME));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(NO_CACHE));
    response
}

/// Adds the browser hardening headers to every response, keeping any a
/// handler already set.
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    for (name, value) in [
        (X_CONTENT_TYPE_OPTIONS, "nosniff"),
        (X_FRAME_OPTIONS, "SAMEORIGIN"),
        (REFERRER_POLICY, "no-referrer"),
        (DNS_PREFETCH_CONTROL, "off"),
        (CROSS_ORIGIN_OPENER_POLICY, "same-origin"),
    ] {
        headers
            .entry(name)
            .or_insert_with(|| HeaderValue::from_static(value));
    }
    response
}
