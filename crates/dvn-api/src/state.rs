//! # Application State
//!
//! Shared state passed to all route handlers via the `State` extractor.
//! Every domain table is static, so the state only carries configuration
//! and the Prometheus handle.

use metrics_exporter_prometheus::PrometheusHandle;

/// Application configuration, read from the environment by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Whether `/metrics` is mounted and request metrics are recorded.
    pub metrics_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            metrics_enabled: true,
        }
    }
}

impl AppConfig {
    /// Build configuration from `PORT` and `DVN_METRICS_ENABLED`.
    ///
    /// Unparseable or missing values fall back to the defaults. Metrics stay
    /// enabled unless the variable is exactly `false` (case-insensitive).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let metrics_enabled = lookup("DVN_METRICS_ENABLED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(defaults.metrics_enabled);
        Self {
            port,
            metrics_enabled,
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Configuration the app was built with.
    pub config: AppConfig,
    /// Installed Prometheus recorder, if the binary installed one.
    pub prometheus: Option<PrometheusHandle>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("prometheus", &self.prometheus.is_some())
            .finish()
    }
}

impl AppState {
    /// State with default configuration and no Prometheus recorder.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default(), None)
    }

    /// State with explicit configuration.
    pub fn with_config(config: AppConfig, prometheus: Option<PrometheusHandle>) -> Self {
        Self { config, prometheus }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
