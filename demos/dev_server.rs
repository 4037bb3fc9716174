#!/usr/bin/env cargo
//! Development Server Demo
//!
//! Serves the whoami endpoint with Actix's access log on stderr. Run with:
//!
//! ```
//! RUST_LOG=info cargo run --example dev_server
//! ```
//!
//! Then try:
//!
//! ```
//! curl -H 'Accept-Language: es-ES,en;q=0.5' -H 'X-Forwarded-For: 203.0.113.5' \
//!      http://localhost:3000/api/whoami
//! ```

use actix_web::{App, HttpServer, middleware::Logger, web};
use whoami_api::{Cors, CorsConfig, health, index, whoami};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("🚀 Request Header Parser Development Server");
    println!("===========================================\n");

    env_logger::init();

    println!("🔧 Development Configuration:");
    println!("  - Logging: env_logger, controlled by RUST_LOG");
    println!("  - Metrics: Disabled for development");
    println!("  - CORS: Permissive on /api\n");

    println!("📋 Available endpoints:");
    println!("  GET  /             - Welcome banner");
    println!("  GET  /api/whoami   - Client description");
    println!("  GET  /api/health   - Health check\n");

    println!("🌐 Starting server at http://localhost:3000");
    println!("   Press Ctrl+C to stop\n");

    HttpServer::new(|| {
        App::new()
            .wrap(Cors::new(CorsConfig::default()))
            .wrap(Logger::default())
            .route("/", web::get().to(index))
            .route("/api/whoami", web::get().to(whoami))
            .route("/api/health", web::get().to(health))
    })
    .bind("127.0.0.1:3000")?
    .run()
    .await
}
