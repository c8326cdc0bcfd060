//! HTTP server startup logic.
//!
//! Plain HTTP only. A failure to bind the port is fatal: the error
//! propagates out of `start_server` and the process exits non-zero.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(std::io::Error),

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

/// Bind the listener and serve the router.
///
/// Blocks until the process is terminated externally; there is no graceful
/// drain. Each inbound connection is handled on its own tokio task.
pub async fn start_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr).await.map_err(ServerError::Bind)?;
    tracing::info!(%addr, "Starting HTTP server");

    axum::serve(listener, app)
        .await
        .map_err(ServerError::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::create_router;

    #[tokio::test]
    async fn bind_failure_surfaces_as_bind_error() {
        // Occupy a port, then try to start the server on the same one.
        let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = occupied.local_addr().unwrap();

        let err = start_server(create_router(), addr)
            .await
            .expect_err("second bind should fail");
        assert!(matches!(err, ServerError::Bind(_)));
    }
}
