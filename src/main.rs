//! Smoke-test greeting server for Kubernetes deployments.
//!
//! This is the application entry point. It initializes tracing, builds the
//! Axum router with the single greeting route, and starts the HTTP server
//! on port 8080.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_kubernetes::config::{DEFAULT_LOG_FILTER, HTTP_HOST, HTTP_PORT};
use hello_kubernetes::http::start_server;
use hello_kubernetes::routes::create_router;

/// hello-kubernetes: a single-endpoint HTTP greeting server
#[derive(Parser, Debug)]
#[command(name = "hello-kubernetes", version, about)]
struct Args {
    /// Log level filter (e.g., "hello_kubernetes=debug,axum=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = create_router();

    let addr: SocketAddr = format!("{}:{}", HTTP_HOST, HTTP_PORT)
        .parse()
        .expect("Invalid compile-time bind address");

    start_server(app, addr).await?;

    Ok(())
}
