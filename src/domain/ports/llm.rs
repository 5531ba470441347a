use crate::domain::errors::DomainError;
use async_trait::async_trait;

/// Boundary to the remote language model. No determinism contract; failures
/// surface as `LanguageModel` errors and leave conversation state untouched.
#[async_trait]
pub trait LlmService: Send + Sync {
    async fn complete_with_system(&self, system: &str, prompt: &str)
        -> Result<String, DomainError>;
}
