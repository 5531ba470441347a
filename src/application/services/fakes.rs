//! In-process fakes for the provider ports, used across service tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{
    ports::{EmbeddingService, LlmService, TextExtractor},
    DomainError, Embedding, UploadedDocument,
};

/// Treats each document's bytes as UTF-8 text and concatenates them in
/// upload order, mirroring the real extractor's contract without parsing.
pub struct FakeExtractor {
    failure: Option<String>,
}

impl FakeExtractor {
    pub fn new() -> Self {
        Self { failure: None }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl TextExtractor for FakeExtractor {
    async fn extract(&self, documents: &[UploadedDocument]) -> Result<String, DomainError> {
        if let Some(msg) = &self.failure {
            return Err(DomainError::extraction(msg.clone()));
        }
        Ok(documents
            .iter()
            .map(|d| String::from_utf8_lossy(&d.bytes).into_owned())
            .collect())
    }
}

/// Deterministic embedder: a byte histogram folded into a small fixed
/// dimension. Same text always yields the same vector, which is what the
/// retrieval idempotence tests rely on.
pub struct FakeEmbedding {
    fail: AtomicBool,
}

impl FakeEmbedding {
    pub const DIMENSION: usize = 8;

    pub fn new() -> Self {
        Self {
            fail: AtomicBool::new(false),
        }
    }

    pub fn fail_next_calls(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    fn vector_for(text: &str) -> Embedding {
        let mut v = vec![0.0f32; Self::DIMENSION];
        for b in text.bytes() {
            v[b as usize % Self::DIMENSION] += 1.0;
        }
        Embedding::new(v)
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::embedding("provider unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl EmbeddingService for FakeEmbedding {
    async fn embed(&self, text: &str) -> Result<Embedding, DomainError> {
        self.check()?;
        Ok(Self::vector_for(text))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, DomainError> {
        self.check()?;
        Ok(texts.iter().map(|t| Self::vector_for(t)).collect())
    }

    fn dimension(&self) -> usize {
        Self::DIMENSION
    }
}

/// Scripted language model: answers with a fixed reply, optionally failing
/// the next call, and records the last prompt it was given.
pub struct FakeLlm {
    answer: String,
    next_failure: Mutex<Option<String>>,
    last_prompt: Mutex<Option<String>>,
}

impl FakeLlm {
    pub fn answering(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            next_failure: Mutex::new(None),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn fail_next(&self, message: impl Into<String>) {
        *self.next_failure.lock().unwrap() = Some(message.into());
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmService for FakeLlm {
    async fn complete_with_system(
        &self,
        _system: &str,
        prompt: &str,
    ) -> Result<String, DomainError> {
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        if let Some(msg) = self.next_failure.lock().unwrap().take() {
            return Err(DomainError::language_model(msg));
        }
        Ok(self.answer.clone())
    }
}
