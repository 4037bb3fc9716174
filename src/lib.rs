//! Whoami API - a request header parser microservice
//!
//! A single JSON endpoint, `GET /api/whoami`, describes the calling client:
//! - its IP address, honoring common proxy and CDN forwarding headers
//! - its `Accept-Language` preferences, sorted by quality weight
//! - a browser / operating system / device breakdown of its `User-Agent`
//!
//! ## Architecture
//!
//! - `models/` - Wire records returned by the endpoints
//! - `services/` - Header parsers, response assembly and validation, metrics
//! - `utils/` - Client address resolution and header extraction
//! - `handlers/` - HTTP request handlers and the app factory
//! - `middleware/` - CORS, request ids and metrics collection
//! - `config/` - Configuration structures and environment loading
//! - `telemetry` - Tracing subscriber setup
//! - `server` - Server construction from a [`ServerConfig`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use whoami_api::{ServerConfig, build_server};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     build_server(ServerConfig::default())?.await
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod server;
pub mod services;
pub mod telemetry;
pub mod utils;

pub use config::{CorsConfig, LogFormat, LoggingConfig, MetricsConfig, ServerConfig};
pub use error::WhoamiError;
pub use handlers::{
    create_base_app, create_openapi_spec, get_metrics, health, index, version, whoami,
    whoami_response,
};
pub use middleware::{Cors, MetricsMiddleware, RequestId, RequestIdMiddleware};
pub use models::{
    BrowserInfo, DeviceInfo, DeviceType, ErrorResponse, HeaderParseResponse, HealthResponse,
    LanguagePreference, OsInfo, ParsedData, VersionResponse,
};
pub use server::build_server;
pub use services::{
    AppMetrics, ClientHeaders, UserAgentInfo, assemble_response, parse_accept_language,
    parse_user_agent, render_response,
};
pub use telemetry::init_tracing;
pub use utils::{extract_client_ip, resolve_client_ip};
