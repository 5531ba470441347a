use thiserror::Error;

/// Error taxonomy for the document-chat pipeline.
///
/// Provider variants (`EmbeddingProvider`, `LanguageModel`) are recoverable at
/// query time: the caller may retry without losing conversation history.
/// `Extraction`, `NoContent` and a build-time `EmbeddingProvider` failure are
/// fatal to the batch being processed, never to the process itself.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Document extraction failed: {0}")]
    Extraction(String),

    #[error("Documents contain no extractable text")]
    NoContent,

    #[error("Embedding provider error: {0}")]
    EmbeddingProvider(String),

    #[error("Language model error: {0}")]
    LanguageModel(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl DomainError {
    pub fn extraction(msg: impl Into<String>) -> Self {
        Self::Extraction(msg.into())
    }

    pub fn embedding(msg: impl Into<String>) -> Self {
        Self::EmbeddingProvider(msg.into())
    }

    pub fn language_model(msg: impl Into<String>) -> Self {
        Self::LanguageModel(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
