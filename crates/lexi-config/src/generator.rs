use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_tokens_per_word() -> u32 {
    150
}

fn default_max_tokens_cap() -> u32 {
    2000
}

fn default_request_timeout_seconds() -> u64 {
    60
}

fn default_input_cost_per_1k() -> f64 {
    0.0010
}

fn default_output_cost_per_1k() -> f64 {
    0.0020
}

/// Text-generation endpoint settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Bearer credential. Usually supplied through `OPENAI_API_KEY`, never
    /// written back to disk by the tool itself.
    #[serde(default, skip_serializing)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Output token allowance per requested word
    #[serde(default = "default_tokens_per_word")]
    pub tokens_per_word: u32,
    #[serde(default = "default_max_tokens_cap")]
    pub max_tokens_cap: u32,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
    /// USD per 1K prompt tokens
    #[serde(default = "default_input_cost_per_1k")]
    pub input_cost_per_1k: f64,
    /// USD per 1K completion tokens
    #[serde(default = "default_output_cost_per_1k")]
    pub output_cost_per_1k: f64,
}

impl GeneratorConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Completion budget for a batch of `count` words
    pub fn max_tokens_for(&self, count: usize) -> u32 {
        let wanted = self.tokens_per_word.saturating_mul(count as u32);
        wanted.min(self.max_tokens_cap)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            tokens_per_word: default_tokens_per_word(),
            max_tokens_cap: default_max_tokens_cap(),
            request_timeout_seconds: default_request_timeout_seconds(),
            input_cost_per_1k: default_input_cost_per_1k(),
            output_cost_per_1k: default_output_cost_per_1k(),
        }
    }
}
