//! Tracing subscriber setup and per-request log fields.

use crate::{
    config::{LogFormat, LoggingConfig},
    utils::{extract_client_ip, extract_user_agent},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// Fails if a subscriber is already installed or the filter directive is invalid.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(&config.filter)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match config.format {
        LogFormat::Json => builder.json().try_init()?,
        LogFormat::Pretty => builder.try_init()?,
    }

    info!(
        format = ?config.format,
        filter = %config.filter,
        "Logging initialized"
    );

    Ok(())
}

/// Fields attached to the request log lines
pub struct RequestFields {
    pub method: String,
    pub path: String,
    pub client_ip: String,
    pub user_agent: Option<String>,
}

impl RequestFields {
    pub fn from_request(req: &actix_web::HttpRequest) -> Self {
        Self {
            method: req.method().to_string(),
            path: req.path().to_string(),
            client_ip: extract_client_ip(req),
            user_agent: extract_user_agent(req),
        }
    }
}
