//! # Request Metrics
//!
//! Every routed request is recorded twice: in the in-process [`ApiMetrics`]
//! counters and through the `metrics` facade. The binary installs a
//! Prometheus recorder for the facade; without one those calls are no-ops
//! and `/metrics` falls back to the in-process counters.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;

#[derive(Debug, Default)]
struct Counters {
    requests: AtomicU64,
    client_errors: AtomicU64,
    server_errors: AtomicU64,
}

/// Cheaply clonable handle to shared request counters.
#[derive(Debug, Clone, Default)]
pub struct ApiMetrics {
    counters: Arc<Counters>,
}

impl ApiMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests seen so far.
    pub fn requests(&self) -> u64 {
        self.counters.requests.load(Ordering::Relaxed)
    }

    /// Responses with a 4xx status.
    pub fn client_errors(&self) -> u64 {
        self.counters.client_errors.load(Ordering::Relaxed)
    }

    /// Responses with a 5xx status.
    pub fn server_errors(&self) -> u64 {
        self.counters.server_errors.load(Ordering::Relaxed)
    }

    /// Record one finished request.
    pub fn observe(&self, method: &str, route: &str, status: u16, elapsed_secs: f64) {
        self.counters.requests.fetch_add(1, Ordering::Relaxed);
        match status {
            400..=499 => {
                self.counters.client_errors.fetch_add(1, Ordering::Relaxed);
            }
            500..=599 => {
                self.counters.server_errors.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }

        let labels = [
            ("method", method.to_string()),
            ("route", route.to_string()),
            ("status", status.to_string()),
        ];
        metrics::counter!("dvn_http_requests_total", &labels).increment(1);
        metrics::histogram!("dvn_http_request_duration_seconds", &labels).record(elapsed_secs);
    }

    /// Prometheus text for the in-process counters.
    pub fn render_fallback(&self) -> String {
        let mut out = String::new();
        for (name, kind, value) in [
            ("dvn_http_requests_total", "counter", self.requests()),
            ("dvn_http_client_errors_total", "counter", self.client_errors()),
            ("dvn_http_server_errors_total", "counter", self.server_errors()),
        ] {
            out.push_str(&format!("# TYPE {name} {kind}\n{name} {value}\n"));
        }
        out
    }
}

/// Records method, route template, status and latency for each request.
///
/// The route label is the matched template (`/v1/citations/{code}`), never
/// the raw path, so arbitrary URLs cannot create new series.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let Some(metrics) = request.extensions().get::<ApiMetrics>().cloned() else {
        return next.run(request).await;
    };
    let method = request.method().as_str().to_owned();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "unmatched".to_owned(), |p| p.as_str().to_owned());

    let started = Instant::now();
    let response = next.run(request).await;
    metrics.observe(
        &method,
        &route,
        response.status().as_u16(),
        started.elapsed().as_secs_f64(),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_counters_are_zero() {
        let metrics = ApiMetrics::new();
        assert_eq!(metrics.requests(), 0);
        assert_eq!(metrics.client_errors() + metrics.server_errors(), 0);
    }

    #[test]
    fn statuses_bucketed() {
        let metrics = ApiMetrics::new();
        metrics.observe("GET", "/v1/factors", 200, 0.002);
        metrics.observe("POST", "/v1/deadlines", 422, 0.001);
        metrics.observe("GET", "/v1/citations/{code}", 404, 0.001);
        metrics.observe("GET", "/v1/resources", 500, 0.003);
        assert_eq!(metrics.requests(), 4);
        assert_eq!(metrics.client_errors(), 2);
        assert_eq!(metrics.server_errors(), 1);
    }

    #[test]
    fn clones_observe_the_same_counters() {
        let metrics = ApiMetrics::new();
        metrics.clone().observe("GET", "/openapi.json", 200, 0.0);
        assert_eq!(metrics.requests(), 1);
    }

    #[test]
    fn fallback_text() {
        let metrics = ApiMetrics::new();
        metrics.observe("POST", "/v1/recommendation", 422, 0.0);
        let text = metrics.render_fallback();
        assert!(text.contains("# TYPE dvn_http_requests_total counter\ndvn_http_requests_total 1\n"));
        assert!(text.contains("dvn_http_client_errors_total 1"));
        assert!(text.contains("dvn_http_server_errors_total 0"));
    }
}
