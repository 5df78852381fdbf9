use async_trait::async_trait;
use risk_copilot::{
    Error, Result,
    analysis::AnalysisResult,
    llm::LlmClient,
    publisher::EventPublisher,
};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing: returns scripted responses in order and
/// records every prompt it receives.
#[derive(Debug)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<String>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Spy publisher for testing: counts publish calls, records payloads, and can
/// be told to fail.
#[derive(Debug, Default)]
pub struct SpyPublisher {
    pub published: Arc<Mutex<Vec<AnalysisResult>>>,
    pub error: Option<String>,
}

impl SpyPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn publish_count(&self) -> usize {
        self.published.lock().unwrap().len()
    }

    pub fn get_published(&self) -> Vec<AnalysisResult> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for SpyPublisher {
    async fn publish(&self, result: &AnalysisResult) -> Result<()> {
        if let Some(ref error) = self.error {
            return Err(Error::publish(error.clone()));
        }

        self.published.lock().unwrap().push(result.clone());
        Ok(())
    }
}
