//! # dvn-api: Axum API Service
//!
//! HTTP surface for the Divorce Navigator, built on Axum/Tower/Tokio.
//! Assembles the advisor, deadline and directory routers into one
//! application with shared tracing and metrics middleware.
//!
//! ## Routes
//!
//! - `/v1/factors`, `/v1/complexity`, `/v1/recommendation`,
//!   `/v1/checklist*`: advisor
//! - `/v1/deadlines`: deadline projection
//! - `/v1/resources`, `/v1/citations*`: directory
//! - `/openapi.json`: generated OpenAPI document
//! - `/health/*`: liveness and readiness probes
//! - `/metrics`: Prometheus exposition, when enabled
//!
//! ## Middleware Stack (Tower)
//!
//! CorsLayer → TraceLayer → MetricsMiddleware → Handler
//!
//! ## Crate Policy
//!
//! - Sits at the top of the dependency DAG.
//! - No business logic in route handlers; they delegate to domain crates.
//! - All errors map to structured HTTP responses via `AppError`.

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::metrics::ApiMetrics;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router with all routes and middleware.
///
/// Health probes and `/metrics` sit outside the metrics middleware so
/// scrapes do not count themselves.
pub fn app(state: AppState) -> Router {
    let metrics = ApiMetrics::new();
    let metrics_on = state.config.metrics_enabled;

    let mut api = Router::new()
        .merge(routes::advisor::router())
        .merge(routes::deadlines::router())
        .merge(routes::directory::router())
        .merge(openapi::router());

    if metrics_on {
        api = api
            .layer(from_fn(middleware::metrics::metrics_middleware))
            .layer(Extension(metrics.clone()));
    }

    let api = api
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let mut probes = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    if metrics_on {
        probes = probes
            .route("/metrics", get(prometheus_metrics))
            .layer(Extension(metrics));
    }

    let probes = probes.with_state(state);

    Router::new()
        .merge(probes)
        .merge(api)
        .layer(CorsLayer::permissive())
}

/// Liveness probe.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe. Every table is compiled in, so a running process is
/// always ready.
async fn readiness() -> &'static str {
    "ready"
}

/// GET /metrics: Prometheus text exposition.
///
/// Renders the installed recorder when the binary set one up, otherwise the
/// in-process request counters.
async fn prometheus_metrics(
    State(state): State<AppState>,
    Extension(metrics): Extension<ApiMetrics>,
) -> impl IntoResponse {
    let body = match &state.prometheus {
        Some(handle) => handle.render(),
        None => metrics.render_fallback(),
    };
    ([(CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}
