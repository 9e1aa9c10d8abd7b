use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One bounded batch request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResponse {
    pub text: String,
    pub usage: TokenUsage,
}

/// Token usage reported for a call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl TokenUsage {
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No response within {0:?}")]
    Timeout(Duration),
}

/// Text-generation endpoint interface
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one completion
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerateError>;

    /// Cheap call proving the endpoint and credential work
    async fn check_connection(&self) -> Result<(), GenerateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}
