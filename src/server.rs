//! HTTP server construction.

use crate::{config::ServerConfig, handlers::create_base_app, services::AppMetrics};
use actix_web::{HttpServer, dev::Server};
use std::io;

/// Bind the application according to `config` and return the running server handle
///
/// The returned [`Server`] must be awaited (or spawned) to serve requests; its
/// handle can be used for graceful shutdown.
pub fn build_server(config: ServerConfig) -> io::Result<Server> {
    let metrics = AppMetrics::new().map_err(io::Error::other)?;
    let bind_address = config.bind_address();

    let cors = config.cors.clone();
    let metrics_config = config.metrics.clone();
    let mut server = HttpServer::new(move || {
        create_base_app(cors.clone(), metrics_config.clone(), metrics.clone())
    });

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    tracing::info!(
        bind_address = %bind_address,
        workers = ?config.workers,
        cors_origin = %config.cors.allow_origin,
        metrics_enabled = config.metrics.enabled,
        "Starting request header parser"
    );

    Ok(server.bind(&bind_address)?.run())
}
