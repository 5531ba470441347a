use async_trait::async_trait;
use rig::client::{CompletionClient, ProviderClient};
use rig::completion::Prompt;
use rig::providers::openai;

use crate::domain::{ports::LlmService, DomainError};

/// OpenAI chat-completion adapter. Reads `OPENAI_API_KEY` from the
/// environment on each call; no timeout is enforced here, a hung provider
/// call blocks the interaction that issued it.
pub struct OpenAiLlm {
    model: String,
}

impl OpenAiLlm {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    pub fn default_model() -> Self {
        Self::new("gpt-4o-mini")
    }
}

#[async_trait]
impl LlmService for OpenAiLlm {
    async fn complete_with_system(
        &self,
        system: &str,
        prompt: &str,
    ) -> Result<String, DomainError> {
        let client = openai::Client::from_env();
        let agent = client.agent(&self.model).preamble(system).build();
        agent
            .prompt(prompt)
            .await
            .map_err(|e| DomainError::language_model(e.to_string()))
    }
}
