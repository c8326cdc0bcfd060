//! hello-kubernetes: a single-endpoint HTTP greeting server.
//!
//! Serves a fixed plain-text greeting on `GET /` over port 8080, intended
//! as a smoke-test container image for a Kubernetes deployment. There is no
//! state and no configuration; the whole program is one route registration
//! plus a listener.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
