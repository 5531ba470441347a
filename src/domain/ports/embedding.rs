use crate::domain::{errors::DomainError, Embedding};
use async_trait::async_trait;

/// Boundary to the remote embedding provider.
///
/// Must be idempotent (same text, same vector) for retrieval determinism to
/// hold within a session. Failures surface as `EmbeddingProvider` errors.
#[async_trait]
pub trait EmbeddingService: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Embedding, DomainError>;
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, DomainError>;
    fn dimension(&self) -> usize;
}
