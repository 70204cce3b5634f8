//! Gemini gateway: implements [`LlmGateway`] over the REST API with `reqwest`.

use super::types::{
    GenerateContentRequest, GenerateContentResponse, extract_text, map_status,
    map_transport_error,
};
use async_trait::async_trait;
use liveqa_application::ports::agent::AgentBuildError;
use liveqa_application::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use liveqa_domain::{Model, Temperature};
use std::time::Duration;
use tracing::{debug, info};

/// Connection settings for the Gemini API.
#[derive(Clone)]
pub struct GeminiSettings {
    pub model: Model,
    pub temperature: Temperature,
    pub api_key: String,
    pub base_url: String,
    pub request_timeout: Duration,
}

impl std::fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// LLM gateway for Google Gemini
#[derive(Debug)]
pub struct GeminiLlmGateway {
    client: reqwest::Client,
    settings: GeminiSettings,
}

impl GeminiLlmGateway {
    pub fn new(settings: GeminiSettings) -> Result<Self, AgentBuildError> {
        if settings.api_key.trim().is_empty() {
            return Err(AgentBuildError::Configuration(
                "Gemini API key is empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| AgentBuildError::Client(e.to_string()))?;

        info!("GeminiLlmGateway initialized (model: {})", settings.model);
        Ok(Self { client, settings })
    }

    /// `{base_url}/v1beta/models/{model}:generateContent`
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    fn model(&self) -> &Model {
        &self.settings.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let body = GenerateContentRequest::user_prompt(
            &request.prompt,
            self.settings.temperature.value(),
            &request.stop,
        );

        debug!(
            "Sending {} byte prompt to {}",
            request.prompt.len(),
            self.settings.model
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(map_status(status.as_u16(), &text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        extract_text(&parsed)
    }
}
