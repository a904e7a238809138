//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Record-context middleware for `/post/{id}` routes
//! - Graceful shutdown
//! - Plain-text error responses

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use extractors::CurrentPost;
pub use server::{build_router, run_server, ServerConfig, ServerError};
