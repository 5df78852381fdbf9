use super::{parse_analysis, prompt::build_prompt, types::AnalysisResult};
use crate::llm::LlmClient;
use std::sync::Arc;
use tracing::{info, warn};

/// The risk-extraction pipeline: prompt construction, one model invocation,
/// strict-format parsing. Constructed once at startup and shared read-only
/// across requests.
pub struct RiskAnalyzer {
    llm: Arc<dyn LlmClient>,
}

impl RiskAnalyzer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Analyzes one transcript. A model-side failure is recovered into the
    /// result's `error_message` so the caller never sees a raw fault.
    /// Single attempt per request; no retry.
    pub async fn analyze(&self, conversation_log: &str) -> AnalysisResult {
        let prompt = build_prompt(conversation_log);

        let raw = match self.llm.generate(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Model invocation failed: {}", e);
                return AnalysisResult::failure(format!("Model invocation failed: {}", e));
            }
        };

        let result = parse_analysis(&raw);
        info!(
            risks = result.risks.len(),
            failed = result.is_failure(),
            "Transcript analysis finished"
        );
        result
    }
}
