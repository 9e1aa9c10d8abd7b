use async_trait::async_trait;
use lexi_config::generator::GeneratorConfig;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::client::{
    GenerateError, GenerationRequest, GenerationResponse, ProviderMetadata, TextGenerator,
    TokenUsage,
};

/// OpenAI-compatible chat completions endpoint
#[derive(Clone)]
pub struct OpenAiGenerator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

impl OpenAiGenerator {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(
            config.api_key.clone(),
            config.api_url.clone(),
            config.model.clone(),
        )
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GenerateError> {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerateError::RateLimitExceeded);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GenerateError::AuthenticationError);
        }

        if !status.is_success() {
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = body["error"]["message"]
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(GenerateError::ApiError(message));
        }

        Ok(response)
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerateError> {
        if self.api_key.is_empty() {
            return Err(GenerateError::AuthenticationError);
        }

        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        tracing::debug!(
            "Requesting completion from {} ({} prompt chars, max {} tokens)",
            self.model,
            request.prompt.len(),
            request.max_tokens
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let response = Self::check_status(response).await?;

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| {
                GenerateError::MalformedResponse(format!("Failed to parse response: {}", e))
            })?;

        let text = chat
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                GenerateError::MalformedResponse("No completion in response".to_string())
            })?;

        let usage = chat
            .usage
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        tracing::info!(
            "Completion used {} input / {} output tokens",
            usage.input_tokens,
            usage.output_tokens
        );

        Ok(GenerationResponse {
            text: text.trim().to_string(),
            usage,
        })
    }

    async fn check_connection(&self) -> Result<(), GenerateError> {
        if self.api_key.is_empty() {
            return Err(GenerateError::AuthenticationError);
        }

        let response = self
            .client
            .get(format!("{}/models", self.api_url))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "OpenAI".to_string(),
            model: self.model.clone(),
            requires_api_key: true,
        }
    }
}
