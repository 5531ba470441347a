use crate::domain::{errors::DomainError, DocumentChunk, Embedding, SearchResult};
use async_trait::async_trait;

/// Chunk-to-vector store queryable by nearest-neighbor search.
///
/// `search` returns `min(top_k, stored)` results ordered by non-increasing
/// similarity; ties break by chunk insertion order. `clear` empties the store
/// so a reprocessed batch replaces the index wholesale.
#[async_trait]
pub trait VectorStore: Send + Sync {
    async fn upsert(&self, chunk: &DocumentChunk, embedding: &Embedding)
        -> Result<(), DomainError>;
    async fn search(
        &self,
        query: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, DomainError>;
    async fn clear(&self) -> Result<(), DomainError>;
}
