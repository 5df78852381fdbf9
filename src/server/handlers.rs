use super::types::{ConversationRequest, ErrorResponse, LivenessResponse};
use crate::{analysis::RiskAnalyzer, publisher::EventPublisher};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Clone)]
pub struct AppState {
    /// Absent when no model credential was configured at startup.
    pub analyzer: Option<Arc<RiskAnalyzer>>,
    /// Absent when no topic destination was configured at startup.
    pub publisher: Option<Arc<dyn EventPublisher>>,
}

pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "Server is up. Send a POST request to / to run a conversation analysis."
            .to_string(),
    })
}

/// Runs the pipeline for one transcript. A model or parse failure still
/// returns 200 with `error_message` set in the payload; callers must inspect
/// the payload, not just the status code.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<ConversationRequest>,
) -> Result<Json<crate::analysis::AnalysisResult>, (StatusCode, Json<ErrorResponse>)> {
    info!(
        transcript_len = request.conversation_log.len(),
        "Received analysis request"
    );

    let Some(analyzer) = state.analyzer.as_ref() else {
        error!("Analysis request rejected: no model credential configured");
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: "Model API key is not configured. Set the 'LLM_API_KEY' environment variable."
                    .to_string(),
            }),
        ));
    };

    let result = analyzer.analyze(&request.conversation_log).await;

    // Publish only completed analyses that actually found something. Publish
    // failure never affects the response.
    if !result.is_failure() && !result.risks.is_empty() {
        match state.publisher.as_ref() {
            Some(publisher) => match publisher.publish(&result).await {
                Ok(()) => info!("Analysis result published to event topic"),
                Err(e) => warn!("Failed to publish analysis result: {}", e),
            },
            None => debug!("Event publishing disabled; skipping"),
        }
    }

    Ok(Json(result))
}
