//! Greeting endpoint served on the root path.
//!
//! Returns a fixed plain-text body. Used as a smoke test that a Kubernetes
//! deployment can route traffic to the pod and get a response back.

use crate::config::GREETING;

/// Greeting handler.
///
/// Stateless and side-effect free; every request gets the identical body,
/// regardless of request count or concurrency.
pub async fn index() -> &'static str {
    GREETING
}
