use async_trait::async_trait;
use tracing::debug;

use crate::domain::{ports::TextExtractor, DomainError, UploadedDocument};

/// PDF text extraction backed by the `pdf-extract` crate.
///
/// Documents are parsed in upload order and their page text concatenated
/// with no separator. Parsing is CPU-bound, so each document runs under
/// `spawn_blocking`.
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, documents: &[UploadedDocument]) -> Result<String, DomainError> {
        let mut text = String::new();

        for doc in documents {
            debug!(name = %doc.name, bytes = doc.bytes.len(), "extracting PDF");

            let bytes = doc.bytes.clone();
            let extracted = tokio::task::spawn_blocking(move || {
                pdf_extract::extract_text_from_mem(&bytes)
            })
            .await
            .map_err(|e| DomainError::unexpected(format!("extraction task failed: {e}")))?
            .map_err(|e| {
                DomainError::extraction(format!("unreadable document {}: {e}", doc.name))
            })?;

            text.push_str(&extracted);
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_pdf_fails_the_batch() {
        let extractor = PdfTextExtractor::new();
        let docs = vec![UploadedDocument::new("bad.pdf", b"not a pdf".to_vec())];

        let err = extractor.extract(&docs).await.unwrap_err();
        assert!(matches!(err, DomainError::Extraction(_)));
    }

    #[tokio::test]
    async fn test_empty_batch_yields_empty_text() {
        let extractor = PdfTextExtractor::new();
        assert_eq!(extractor.extract(&[]).await.unwrap(), "");
    }
}
