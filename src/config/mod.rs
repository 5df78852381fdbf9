mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Resolves the full configuration from the environment, once at startup.
/// Handlers receive the resolved values and never read the environment
/// themselves.
pub fn load() -> Result<Config> {
    let llm = LlmConfig {
        api_key: var("LLM_API_KEY"),
        base_url: var("LLM_BASE_URL").unwrap_or_default(),
        model: var("LLM_MODEL").unwrap_or_else(default_model),
    };

    let server = ServerConfig {
        host: var("HOST").unwrap_or_else(default_host),
        port: var("PORT")
            .map(|p| p.parse())
            .transpose()
            .map_err(|e| crate::Error::config(format!("Invalid PORT: {}", e)))?
            .unwrap_or_else(default_port),
        logs: LogsConfig {
            level: var("LOG_LEVEL").unwrap_or_else(default_log_level),
        },
    };

    // No project id means publishing is disabled, which is normal in
    // development and test environments.
    let pubsub = var("PUBSUB_PROJECT").map(|project_id| PubSubConfig {
        project_id,
        topic: var("PUBSUB_TOPIC").unwrap_or_else(default_topic),
        endpoint: var("PUBSUB_ENDPOINT").unwrap_or_else(default_pubsub_endpoint),
        access_token: var("PUBSUB_ACCESS_TOKEN"),
    });

    let gateway = GatewayConfig {
        host: var("GATEWAY_HOST").unwrap_or_else(default_host),
        port: var("GATEWAY_PORT")
            .map(|p| p.parse())
            .transpose()
            .map_err(|e| crate::Error::config(format!("Invalid GATEWAY_PORT: {}", e)))?
            .unwrap_or_else(default_gateway_port),
        downstream_url: var("DOWNSTREAM_URL").unwrap_or_else(default_downstream_url),
        timeout_secs: var("GATEWAY_TIMEOUT_SECS")
            .map(|t| t.parse())
            .transpose()
            .map_err(|e| crate::Error::config(format!("Invalid GATEWAY_TIMEOUT_SECS: {}", e)))?
            .unwrap_or_else(default_gateway_timeout_secs),
    };

    debug!(
        model = %llm.model,
        publish_enabled = pubsub.is_some(),
        "Configuration resolved from environment"
    );

    Ok(Config {
        llm,
        server,
        pubsub,
        gateway,
    })
}
