//! Prometheus exposure switch.

use std::env;

/// Whether `/api/metrics` serves the Prometheus registry
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// When false, `/api/metrics` answers 503 and nothing is exposed
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl MetricsConfig {
    /// Read `METRICS_ENABLED`; anything but an explicit off value keeps metrics on
    pub fn from_env() -> Self {
        Self {
            enabled: switch_enabled(env::var("METRICS_ENABLED").ok().as_deref()),
        }
    }
}

fn switch_enabled(raw: Option<&str>) -> bool {
    let Some(raw) = raw else {
        return true;
    };

    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "off" | "no"
    )
}
