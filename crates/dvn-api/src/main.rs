//! Divorce Navigator API server.
//!
//! Reads `PORT` and `DVN_METRICS_ENABLED`, installs a Prometheus recorder
//! when metrics are on, and serves the router from [`dvn_api::app`].

use std::net::SocketAddr;

use anyhow::Context;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::EnvFilter;

use dvn_api::{app, AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let prometheus = if config.metrics_enabled {
        Some(
            PrometheusBuilder::new()
                .install_recorder()
                .context("failed to install Prometheus recorder")?,
        )
    } else {
        None
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::with_config(config, prometheus);
    tracing::info!(?state, "dvn-api listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app(state).into_make_service())
        .await
        .context("server error")?;
    Ok(())
}
