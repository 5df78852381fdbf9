use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ConversationRequest {
    pub conversation_log: String,
}

#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
