use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub llm: LlmConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub pubsub: Option<PubSubConfig>,
    pub gateway: GatewayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Absent key means every analysis request fails fast with a 500; the
    /// process itself still starts so the liveness endpoint stays reachable.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PubSubConfig {
    pub project_id: String,
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default = "default_pubsub_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_gateway_port")]
    pub port: u16,
    #[serde(default = "default_downstream_url")]
    pub downstream_url: String,
    #[serde(default = "default_gateway_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

pub(crate) fn default_model() -> String {
    "gpt-4".to_string()
}

pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    8080
}

pub(crate) fn default_gateway_port() -> u16 {
    8081
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_topic() -> String {
    "risk-analysis-completed".to_string()
}

pub(crate) fn default_pubsub_endpoint() -> String {
    "https://pubsub.googleapis.com".to_string()
}

pub(crate) fn default_downstream_url() -> String {
    "http://127.0.0.1:8080/".to_string()
}

pub(crate) fn default_gateway_timeout_secs() -> u64 {
    120
}
