use std::sync::Arc;
use tracing::instrument;

use crate::domain::{
    ports::{EmbeddingService, VectorStore},
    DocumentChunk, DomainError, SearchResult,
};

/// Builds and queries the semantic index over one batch of chunks.
///
/// Building is all-or-nothing: every chunk is embedded in one provider
/// round-trip before the store is touched, so a provider failure leaves any
/// previously built index intact.
pub struct IndexService {
    embedding: Arc<dyn EmbeddingService>,
    vector_store: Arc<dyn VectorStore>,
}

impl IndexService {
    pub fn new(embedding: Arc<dyn EmbeddingService>, vector_store: Arc<dyn VectorStore>) -> Self {
        Self {
            embedding,
            vector_store,
        }
    }

    /// Replaces the index contents with `chunks` and their embeddings.
    ///
    /// Returns the number of indexed chunks. An empty chunk sequence is
    /// rejected with `NoContent`; an index over zero chunks is never built.
    #[instrument(skip(self, chunks), fields(count = chunks.len()))]
    pub async fn build(&self, chunks: &[DocumentChunk]) -> Result<usize, DomainError> {
        if chunks.is_empty() {
            return Err(DomainError::NoContent);
        }

        let texts: Vec<&str> = chunks.iter().map(|c| c.content.as_str()).collect();
        let embeddings = self.embedding.embed_batch(&texts).await?;

        if embeddings.len() != chunks.len() {
            return Err(DomainError::unexpected(format!(
                "provider returned {} embeddings for {} chunks",
                embeddings.len(),
                chunks.len()
            )));
        }

        self.vector_store.clear().await?;
        for (chunk, embedding) in chunks.iter().zip(embeddings.iter()) {
            self.vector_store.upsert(chunk, embedding).await?;
        }

        Ok(chunks.len())
    }

    /// Embeds `query` and returns its `top_k` nearest chunks, best first.
    #[instrument(skip(self), fields(top_k))]
    pub async fn retrieve(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, DomainError> {
        let embedding = self.embedding.embed(query).await?;
        self.vector_store.search(&embedding, top_k).await
    }
}
