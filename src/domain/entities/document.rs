use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One file from an upload batch: the declared name and the raw bytes.
///
/// Consumed exactly once by extraction; the bytes are never kept after the
/// batch has been processed.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Declared file type check, case-insensitive on the extension.
    pub fn is_pdf(&self) -> bool {
        self.name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("pdf"))
    }
}

/// The unit of retrieval: one bounded-length segment of the batch text.
///
/// `chunk_index` records insertion order from the splitting pass; retrieval
/// treats chunks as an unordered set and only falls back to this index to
/// break similarity ties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub id: Uuid,
    pub content: String,
    pub chunk_index: usize,
}

impl DocumentChunk {
    pub fn new(content: impl Into<String>, chunk_index: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            chunk_index,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub chunk: DocumentChunk,
    pub score: f32,
}
