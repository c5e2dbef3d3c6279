//! HTTP middleware for the gateway API
//!
//! Security headers on every response plus a permissive CORS layer for
//! the browser frontend.

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tower_http::cors::CorsLayer;

/// Security headers middleware
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    // Prevent clickjacking
    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));

    // Prevent MIME type sniffing
    headers.insert(
        "X-Content-Type-Options",
        HeaderValue::from_static("nosniff"),
    );

    // Referrer Policy
    headers.insert(
        "Referrer-Policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    // Cache control for API responses
    headers.insert(
        "Cache-Control",
        HeaderValue::from_static("no-store, no-cache, must-revalidate"),
    );

    // Remove server identification
    headers.remove("Server");

    response
}

/// CORS layer for the browser client. The gateway serves a public read
/// surface; writes are gated by the trust policies, not by origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
