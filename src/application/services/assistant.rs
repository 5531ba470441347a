use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::{info, instrument};

use crate::application::services::{AskOutcome, ChatSession, IndexService};
use crate::domain::{
    ports::{EmbeddingService, LlmService, TextExtractor, VectorStore},
    split_text, DocumentChunk, DomainError, Message, UploadedDocument,
};

/// Synthetic question issued right after a batch is processed so the user
/// starts from an initial assistant message.
const SUMMARY_QUESTION: &str = "Summary of documents";

const DEFAULT_SYSTEM_PROMPT: &str = "You are an assistant answering questions about the \
     user's uploaded documents. Answer using only the provided document context and the \
     prior conversation; say so when the documents do not contain the answer.";

/// Tunables for chunking and retrieval.
#[derive(Debug, Clone)]
pub struct AssistantOptions {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub separator: String,
    pub top_k: usize,
    pub system_prompt: String,
}

impl Default for AssistantOptions {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
            separator: "\n".to_string(),
            top_k: 4,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

/// Outcome of processing one upload batch, including the initial summary
/// exchange.
#[derive(Debug, Clone)]
pub struct ProcessReport {
    pub document_count: usize,
    pub chunk_count: usize,
    /// Seconds spent extracting, chunking and indexing the batch.
    pub processing_time: f64,
    pub history: Vec<Message>,
    /// Seconds the initial summary answer took.
    pub response_time: f64,
}

/// Application controller: validates upload batches, drives the
/// extract → chunk → index pipeline and owns the single live session.
///
/// The session slot is guarded by a mutex so only one action (process or ask)
/// is in flight at a time, which is what keeps the append-only history
/// invariant without further locking.
pub struct Assistant {
    extractor: Arc<dyn TextExtractor>,
    llm: Arc<dyn LlmService>,
    index: Arc<IndexService>,
    session: Mutex<Option<ChatSession>>,
    options: AssistantOptions,
}

impl Assistant {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        embedding: Arc<dyn EmbeddingService>,
        llm: Arc<dyn LlmService>,
        vector_store: Arc<dyn VectorStore>,
        options: AssistantOptions,
    ) -> Self {
        Self {
            extractor,
            llm,
            index: Arc::new(IndexService::new(embedding, vector_store)),
            session: Mutex::new(None),
            options,
        }
    }

    /// Processes an upload batch: validate, extract, chunk, index, then
    /// replace the live session and answer the initial summary question.
    ///
    /// Any failure before the index is built leaves the previous session (if
    /// any) fully usable; the new session only replaces it once the index
    /// exists.
    #[instrument(skip(self, documents), fields(documents = documents.len()))]
    pub async fn process(
        &self,
        documents: &[UploadedDocument],
    ) -> Result<ProcessReport, DomainError> {
        validate_batch(documents)?;

        // Held for the whole rebuild: a question arriving mid-rebuild must
        // wait rather than search the store while it is being replaced.
        let mut guard = self.session.lock().await;

        let started = Instant::now();
        let raw_text = self.extractor.extract(documents).await?;

        let chunks: Vec<DocumentChunk> = split_text(
            &raw_text,
            self.options.chunk_size,
            self.options.chunk_overlap,
            &self.options.separator,
        )
        .into_iter()
        .enumerate()
        .map(|(i, content)| DocumentChunk::new(content, i))
        .collect();

        let chunk_count = self.index.build(&chunks).await?;
        let processing_time = started.elapsed().as_secs_f64();

        info!(chunk_count, processing_time, "batch indexed");

        let session = guard.insert(ChatSession::new(
            self.index.clone(),
            self.llm.clone(),
            self.options.top_k,
            self.options.system_prompt.clone(),
        ));

        let outcome = session.ask(SUMMARY_QUESTION).await?;

        Ok(ProcessReport {
            document_count: documents.len(),
            chunk_count,
            processing_time,
            history: outcome.history,
            response_time: outcome.response_time,
        })
    }

    /// Answers one question through the live session.
    pub async fn ask(&self, question: &str) -> Result<AskOutcome, DomainError> {
        let mut guard = self.session.lock().await;
        match guard.as_mut() {
            Some(session) => session.ask(question).await,
            None => Err(DomainError::validation(
                "Process documents before asking questions",
            )),
        }
    }

    /// Whether a processed batch is ready for questions.
    pub async fn is_ready(&self) -> bool {
        self.session.lock().await.is_some()
    }
}

/// Upload-boundary validation: user-input errors, raised before any core
/// call.
fn validate_batch(documents: &[UploadedDocument]) -> Result<(), DomainError> {
    if documents.is_empty() {
        return Err(DomainError::validation("No documents uploaded"));
    }

    let mut seen = HashSet::new();
    for doc in documents {
        if !doc.is_pdf() {
            return Err(DomainError::validation(format!(
                "Only PDF files are accepted: {}",
                doc.name
            )));
        }
        if !seen.insert(doc.name.to_lowercase()) {
            return Err(DomainError::validation(format!(
                "Duplicate document name: {}",
                doc.name
            )));
        }
    }

    Ok(())
}
