use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct GatewayState {
    pub http: reqwest::Client,
    pub downstream_url: String,
}

/// Forwards the request body to the downstream extraction service unchanged
/// and relays its status, body, and content-type verbatim. The gateway never
/// interprets the payload; any transport failure becomes a plain 500.
pub async fn forward(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    info!(
        downstream = %state.downstream_url,
        body_len = body.len(),
        "Forwarding request"
    );

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json")
        .to_string();

    let outcome = state
        .http
        .post(&state.downstream_url)
        .header(header::CONTENT_TYPE, content_type)
        .body(body)
        .send()
        .await;

    let response = match outcome {
        Ok(response) => response,
        Err(e) => return transport_error(e),
    };

    let status =
        StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let downstream_content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => return transport_error(e),
    };

    match downstream_content_type {
        Some(content_type) => (status, [(header::CONTENT_TYPE, content_type)], bytes).into_response(),
        None => (status, bytes).into_response(),
    }
}

fn transport_error(e: reqwest::Error) -> Response {
    error!("Downstream call failed: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Error: failed to reach extraction service: {}", e),
    )
        .into_response()
}
