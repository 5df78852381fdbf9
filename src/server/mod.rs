pub mod handlers;
mod types;

pub use types::{ConversationRequest, ErrorResponse, LivenessResponse};

use crate::{
    Result,
    analysis::RiskAnalyzer,
    config::Config,
    llm::OpenAiClient,
    publisher::{EventPublisher, PubSubPublisher},
};
use axum::{Router, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Builds the extraction-service router from already-constructed
/// collaborators. Split out from `run` so tests can drive the handlers
/// in-process.
pub fn app(state: handlers::AppState) -> Router {
    Router::new()
        .route("/", get(handlers::liveness).post(handlers::analyze))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: Config) -> Result<()> {
    // The analyzer exists only when a model credential is configured; without
    // one, every analysis request fails fast with a 500 while the liveness
    // endpoint stays up.
    let analyzer = match config.llm.api_key.clone() {
        Some(api_key) => {
            let llm = Arc::new(OpenAiClient::new(api_key, &config.llm));
            Some(Arc::new(RiskAnalyzer::new(llm)))
        }
        None => {
            warn!("LLM_API_KEY is not set; analysis requests will be rejected");
            None
        }
    };

    let publisher: Option<Arc<dyn EventPublisher>> = match config.pubsub {
        Some(ref pubsub) => {
            info!(topic = %pubsub.topic, "Event publishing enabled");
            Some(Arc::new(PubSubPublisher::new(pubsub)))
        }
        None => {
            info!("PUBSUB_PROJECT not set; event publishing disabled");
            None
        }
    };

    let state = handlers::AppState {
        analyzer,
        publisher,
    };

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting extraction service on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
