pub mod client;
pub mod cost;
pub mod openai;
pub mod orchestrator;

#[cfg(test)]
mod tests;

pub use client::{
    GenerateError, GenerationRequest, GenerationResponse, ProviderMetadata, TextGenerator,
    TokenUsage,
};
pub use cost::{CostLedger, CostReport};
pub use openai::OpenAiGenerator;
pub use orchestrator::{Orchestrator, Progress, RunError, RunState};
