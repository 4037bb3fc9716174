//! CORS policy configuration.

use std::env;

pub const DEFAULT_ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const DEFAULT_ALLOW_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept, Authorization, User-Agent, Accept-Language, X-Forwarded-For, X-Real-IP";

/// Configuration for the CORS middleware
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allow_origin: String,
    pub allow_methods: String,
    pub allow_headers: String,
    /// Only paths starting with this prefix get CORS headers and preflight handling
    pub path_prefix: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: "*".to_string(),
            allow_methods: DEFAULT_ALLOW_METHODS.to_string(),
            allow_headers: DEFAULT_ALLOW_HEADERS.to_string(),
            path_prefix: "/api".to_string(),
        }
    }
}

impl CorsConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            allow_origin: non_empty_var("CORS_ALLOW_ORIGIN").unwrap_or(defaults.allow_origin),
            allow_methods: non_empty_var("CORS_ALLOW_METHODS").unwrap_or(defaults.allow_methods),
            allow_headers: non_empty_var("CORS_ALLOW_HEADERS").unwrap_or(defaults.allow_headers),
            path_prefix: non_empty_var("CORS_PATH_PREFIX").unwrap_or(defaults.path_prefix),
        }
    }

    /// Whether the policy covers the given request path
    pub fn applies_to(&self, path: &str) -> bool {
        path.starts_with(&self.path_prefix)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_permissive() {
        let config = CorsConfig::default();
        assert_eq!(config.allow_origin, "*");
        assert!(config.allow_methods.contains("OPTIONS"));
        assert!(config.allow_headers.contains("X-Forwarded-For"));
    }

    #[test]
    fn test_applies_to_api_paths_only() {
        let config = CorsConfig::default();
        assert!(config.applies_to("/api/whoami"));
        assert!(config.applies_to("/api/health"));
        assert!(!config.applies_to("/"));
        assert!(!config.applies_to("/static/app.js"));
    }
}
