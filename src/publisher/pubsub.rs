use super::EventPublisher;
use crate::{Result, analysis::AnalysisResult, config::PubSubConfig};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::json;
use tracing::debug;

/// Publishes analysis results to a Cloud Pub/Sub topic through the REST
/// `topics:publish` endpoint. The message body is the UTF-8 JSON
/// serialization of the result, base64-encoded per the wire format; no
/// attributes, no ordering key, one delivery attempt.
pub struct PubSubPublisher {
    http: reqwest::Client,
    publish_url: String,
    access_token: Option<String>,
    topic: String,
}

impl PubSubPublisher {
    pub fn new(config: &PubSubConfig) -> Self {
        let publish_url = format!(
            "{}/v1/projects/{}/topics/{}:publish",
            config.endpoint.trim_end_matches('/'),
            config.project_id,
            config.topic
        );

        Self {
            http: reqwest::Client::new(),
            publish_url,
            access_token: config.access_token.clone(),
            topic: config.topic.clone(),
        }
    }
}

#[async_trait]
impl EventPublisher for PubSubPublisher {
    async fn publish(&self, result: &AnalysisResult) -> Result<()> {
        let payload = serde_json::to_vec(result)?;
        let body = json!({
            "messages": [{ "data": STANDARD.encode(payload) }]
        });

        let mut request = self.http.post(&self.publish_url).json(&body);
        if let Some(ref token) = self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(crate::Error::publish(format!(
                "Topic '{}' rejected publish with status {}: {}",
                self.topic, status, detail
            )));
        }

        debug!(topic = %self.topic, "Publish acknowledged");
        Ok(())
    }
}
