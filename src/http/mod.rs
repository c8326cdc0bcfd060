//! HTTP server startup.

mod server;

pub use server::{start_server, ServerError};
