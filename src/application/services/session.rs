use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};

use crate::application::services::IndexService;
use crate::domain::{
    normalize_prompt_text, ports::LlmService, Conversation, DomainError, Message, SearchResult,
};

/// Result of one answered question: the full updated history and the
/// wall-clock time the language model call took, in seconds.
#[derive(Debug, Clone)]
pub struct AskOutcome {
    pub history: Vec<Message>,
    pub response_time: f64,
}

/// One live conversation over one built index.
///
/// Binds the index, the growing history and the language model handle.
/// History is append-only and owned exclusively by the session; discarding
/// the session is the only way to discard its history.
pub struct ChatSession {
    index: Arc<IndexService>,
    llm: Arc<dyn LlmService>,
    history: Conversation,
    top_k: usize,
    system_prompt: String,
}

impl ChatSession {
    pub fn new(
        index: Arc<IndexService>,
        llm: Arc<dyn LlmService>,
        top_k: usize,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            index,
            llm,
            history: Conversation::new(),
            top_k,
            system_prompt: system_prompt.into(),
        }
    }

    pub fn history(&self) -> &[Message] {
        &self.history.messages
    }

    /// Answers one question against the indexed documents.
    ///
    /// The question is normalized, the top-k chunks are retrieved with the
    /// normalized text, and the language model is prompted with prior
    /// history, retrieved context and the question. On success the original
    /// question and the answer are appended to history as one exchange; on
    /// provider failure history is left untouched and the session stays
    /// usable.
    #[instrument(skip(self, question), fields(session_id = %self.history.id))]
    pub async fn ask(&mut self, question: &str) -> Result<AskOutcome, DomainError> {
        let normalized = normalize_prompt_text(question);
        let retrieved = self.index.retrieve(&normalized, self.top_k).await?;
        let prompt = self.compose_prompt(&normalized, &retrieved);

        let start = Instant::now();
        let answer = self
            .llm
            .complete_with_system(&self.system_prompt, &prompt)
            .await?;
        let response_time = start.elapsed().as_secs_f64();

        info!(
            retrieved = retrieved.len(),
            response_time, "question answered"
        );

        self.history.push_exchange(question, answer);
        Ok(AskOutcome {
            history: self.history.messages.clone(),
            response_time,
        })
    }

    fn compose_prompt(&self, question: &str, retrieved: &[SearchResult]) -> String {
        let mut prompt = String::new();

        if !self.history.is_empty() {
            let past = self
                .history
                .messages
                .iter()
                .map(|m| format!("{}: {}", m.role.as_str(), m.content))
                .collect::<Vec<_>>()
                .join("\n");
            prompt.push_str(&format!("Previous conversation:\n{past}\n\n"));
        }

        if !retrieved.is_empty() {
            let context = retrieved
                .iter()
                .enumerate()
                .map(|(i, r)| format!("[{}] {}", i + 1, r.chunk.content))
                .collect::<Vec<_>>()
                .join("\n\n");
            prompt.push_str(&format!("Context from the documents:\n{context}\n\n"));
        }

        prompt.push_str(&format!("Question: {question}"));
        prompt
    }
}
