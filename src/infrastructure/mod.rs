pub mod config;
pub mod embedding;
pub mod extract;
pub mod llm;
pub mod vector_store;

pub use config::Config;
pub use embedding::TextEmbedding;
pub use extract::PdfTextExtractor;
pub use llm::OpenAiLlm;
pub use vector_store::InMemoryVectorStore;
