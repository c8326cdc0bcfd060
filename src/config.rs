//! Compile-time server constants.
//!
//! This binary is deliberately configuration-free: the bind address, port,
//! and response body are fixed at compile time. Only the log filter can be
//! overridden at runtime (CLI flag or `RUST_LOG`).

/// Host the HTTP listener binds to (all interfaces).
pub const HTTP_HOST: &str = "0.0.0.0";

/// Port the HTTP listener binds to.
pub const HTTP_PORT: u16 = 8080;

/// Body returned for `GET /`.
pub const GREETING: &str = "Hello, Kubernetes from Gin Gonic!";

/// Default tracing filter when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "hello_kubernetes=info,axum=info";
