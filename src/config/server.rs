//! HTTP server configuration.

use super::{CorsConfig, MetricsConfig};
use std::{env, path::Path};

pub const DEFAULT_PORT: u16 = 3000;

/// Everything `build_server` needs to bind and assemble the application
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Worker count; `None` keeps the Actix default of one per core
    pub workers: Option<usize>,
    pub cors: CorsConfig,
    pub metrics: MetricsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            workers: None,
            cors: CorsConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let in_container = is_container_environment(
            env::var("KUBERNETES_SERVICE_HOST").ok().as_deref(),
            env::var("DOCKER_CONTAINER").ok().as_deref(),
            Path::new("/.dockerenv").exists(),
        );

        let host = env::var("HOST")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default_host(in_container).to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let workers = env::var("WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n: &usize| *n > 0);

        Self {
            host,
            port,
            workers,
            cors: CorsConfig::from_env(),
            metrics: MetricsConfig::from_env(),
        }
    }

    /// `host:port` string suitable for `HttpServer::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn is_container_environment(
    k8s_service_host: Option<&str>,
    docker_container: Option<&str>,
    dockerenv_exists: bool,
) -> bool {
    k8s_service_host.is_some() || docker_container.is_some() || dockerenv_exists
}

fn default_host(in_container: bool) -> &'static str {
    if in_container { "0.0.0.0" } else { "127.0.0.1" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to synchronize tests that modify environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_container_environment_detection() {
        assert!(!is_container_environment(None, None, false));
        assert!(is_container_environment(Some("kubernetes.default.svc"), None, false));
        assert!(is_container_environment(None, Some("true"), false));
        assert!(is_container_environment(None, None, true));
    }

    #[test]
    fn test_default_host_follows_environment() {
        assert_eq!(default_host(false), "127.0.0.1");
        assert_eq!(default_host(true), "0.0.0.0");
    }

    #[test]
    fn test_server_config_from_env() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("HOST", "192.168.1.10");
            env::set_var("PORT", "9090");
            env::set_var("WORKERS", "2");
            env::set_var("CORS_ALLOW_ORIGIN", "https://example.com");
        }

        let config = ServerConfig::from_env();
        assert_eq!(config.bind_address(), "192.168.1.10:9090");
        assert_eq!(config.workers, Some(2));
        assert_eq!(config.cors.allow_origin, "https://example.com");

        unsafe {
            env::remove_var("HOST");
            env::remove_var("PORT");
            env::remove_var("WORKERS");
            env::remove_var("CORS_ALLOW_ORIGIN");
        }
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("PORT", "not-a-port");
            env::set_var("WORKERS", "0");
        }

        let config = ServerConfig::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.workers, None);

        unsafe {
            env::remove_var("PORT");
            env::remove_var("WORKERS");
        }
    }
}
