//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the dispatch layer.

mod handlers;
mod server;

pub use server::HttpServer;
