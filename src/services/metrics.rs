//! Metrics collection and Prometheus integration service.

use crate::models::ParsedData;
use prometheus::{Counter, CounterVec, Gauge, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::time::{Duration, Instant};

/// Label value for client fields the classifier left null
const UNKNOWN_LABEL: &str = "unknown";

/// Application metrics collector for Prometheus integration
///
/// Cloning is cheap and shares the underlying collectors, so one instance is
/// built per server and handed to every worker.
#[derive(Clone)]
pub struct AppMetrics {
    pub registry: Registry,
    pub http_requests_total: CounterVec,
    pub http_request_duration_seconds: HistogramVec,
    pub app_uptime_seconds: Gauge,
    pub app_info: CounterVec,
    pub whoami_clients_total: CounterVec,
    pub whoami_failures_total: Counter,
    pub start_time: Instant,
}

impl AppMetrics {
    /// Create a new metrics collector with its own registry
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = CounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "status", "route"],
        )?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .buckets(vec![
                0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
            ]),
            &["method", "route"],
        )?;

        let app_uptime_seconds = Gauge::new("app_uptime_seconds", "Application uptime in seconds")?;

        let app_info = CounterVec::new(
            Opts::new("app_info", "Application information"),
            &["version", "commit", "build_time"],
        )?;

        let whoami_clients_total = CounterVec::new(
            Opts::new(
                "whoami_clients_total",
                "Described clients by browser, operating system and device class",
            ),
            &["browser", "os", "device"],
        )?;

        let whoami_failures_total = Counter::new(
            "whoami_failures_total",
            "Whoami requests that ended in an internal error",
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(app_uptime_seconds.clone()))?;
        registry.register(Box::new(app_info.clone()))?;
        registry.register(Box::new(whoami_clients_total.clone()))?;
        registry.register(Box::new(whoami_failures_total.clone()))?;

        app_info
            .with_label_values(&[
                env!("CARGO_PKG_VERSION"),
                option_env!("VERGEN_GIT_SHA").unwrap_or(UNKNOWN_LABEL),
                option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or(UNKNOWN_LABEL),
            ])
            .inc();

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            app_uptime_seconds,
            app_info,
            whoami_clients_total,
            whoami_failures_total,
            start_time: Instant::now(),
        })
    }

    /// Record an HTTP request with method, route, status, and duration
    pub fn record_request(&self, method: &str, route: &str, status: u16, duration: Duration) {
        if route == "/api/metrics" {
            return;
        }

        self.http_requests_total
            .with_label_values(&[method, &status.to_string(), route])
            .inc();

        self.http_request_duration_seconds
            .with_label_values(&[method, route])
            .observe(duration.as_secs_f64());
    }

    /// Count a successfully described client
    pub fn record_client(&self, parsed: &ParsedData) {
        let browser = parsed.browser.name.as_deref().unwrap_or(UNKNOWN_LABEL);
        let os = parsed.os.name.as_deref().unwrap_or(UNKNOWN_LABEL);
        let device = parsed
            .device
            .device_type
            .map_or(UNKNOWN_LABEL, |d| d.as_str());

        self.whoami_clients_total
            .with_label_values(&[browser, os, device])
            .inc();
    }

    pub fn record_failure(&self) {
        self.whoami_failures_total.inc();
    }

    /// Update the application uptime gauge
    pub fn update_uptime(&self) {
        self.app_uptime_seconds
            .set(self.start_time.elapsed().as_secs_f64());
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder.encode_to_string(&metric_families)
    }
}
