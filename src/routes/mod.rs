//! HTTP route handlers.
//!
//! A single route is registered: `GET /` returning the greeting. Every
//! other path falls through to axum's default not-found handling, and a
//! non-GET method on `/` gets axum's default method-not-allowed response.
//!
//! Request tracing is enabled via middleware that generates a unique
//! request ID for each incoming request, allowing correlation of all logs
//! within a request.

pub mod greeting;

use axum::{middleware, routing::get, Router};

use crate::middleware::request_id_layer;

/// Creates the Axum router with the greeting route.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(greeting::index))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
