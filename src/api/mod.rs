//! HTTP API for the trust gateway
//!
//! Provides:
//! - Trust surface (score, level, benefits, reach estimate)
//! - Content submission (off-chain and on-chain paths)
//! - Feed reads and targeted like/share mutation
//! - Security headers and CORS middleware

pub mod middleware;
pub mod web;

pub use middleware::{cors_layer, security_headers_middleware};
pub use web::{create_router as create_web_router, WebApiState};
