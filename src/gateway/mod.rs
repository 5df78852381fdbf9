pub mod handlers;

use crate::{Result, config::GatewayConfig};
use axum::{Router, routing::post};
use std::{net::SocketAddr, time::Duration};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the gateway router. Split out from `run` so tests can drive the
/// forwarding handler in-process.
pub fn app(state: handlers::GatewayState) -> Router {
    Router::new()
        .route("/", post(handlers::forward))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: GatewayConfig) -> Result<()> {
    // One shared outbound client; the timeout reflects model latency on the
    // downstream analysis path.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;

    let state = handlers::GatewayState {
        http,
        downstream_url: config.downstream_url.clone(),
    };

    let addr = SocketAddr::new(config.host.parse()?, config.port);

    info!(
        downstream = %config.downstream_url,
        "Starting gateway on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
