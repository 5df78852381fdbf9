use serde::{Deserialize, Serialize};

/// One business risk identified in a transcript. Fields default to empty
/// strings on deserialization so a partially filled record from the model
/// passes through rather than failing the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRecord {
    #[serde(default)]
    pub risk_category: String,
    #[serde(default)]
    pub risk_summary: String,
    #[serde(default)]
    pub trigger_phrase: String,
}

/// Outcome of one analysis run. `error_message` set implies `risks` is empty
/// (by convention); an empty `risks` with no error means the transcript
/// contained nothing risk-bearing, which is a normal result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub risks: Vec<RiskRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl AnalysisResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            risks: Vec::new(),
            error_message: Some(message.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error_message.is_some()
    }
}
