use crate::domain::{errors::DomainError, UploadedDocument};
use async_trait::async_trait;

/// Pulls raw text out of an upload batch.
///
/// The whole batch is extracted in upload order into one concatenated string,
/// with no separator between documents. A single unreadable document fails
/// the batch; partial indexes are never built.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, documents: &[UploadedDocument]) -> Result<String, DomainError>;
}
