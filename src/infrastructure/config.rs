use serde::Deserialize;

use crate::application::AssistantOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub llm: LlmConfig,
    pub embedding: EmbeddingConfig,
    pub chat: ChatConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingConfig {
    pub model: String,
    pub dimension: usize,
}

/// Chunking and retrieval tunables. The defaults match the documented
/// behavior: 1000-char chunks, 200-char overlap, newline-preferred cuts,
/// four retrieved chunks per question.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub separator: String,
    pub top_k: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig {
                model: "gpt-4o-mini".to_string(),
            },
            embedding: EmbeddingConfig {
                model: "text-embedding-3-small".to_string(),
                dimension: 1536,
            },
            chat: ChatConfig {
                chunk_size: 1000,
                chunk_overlap: 200,
                separator: "\n".to_string(),
                top_k: 4,
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
        }
    }
}

impl Config {
    /// Defaults overridden by environment variables where set.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(model) = std::env::var("LLM_MODEL") {
            config.llm.model = model;
        }
        if let Ok(model) = std::env::var("EMBEDDING_MODEL") {
            config.embedding.model = model;
        }
        if let Ok(top_k) = env_parse("RETRIEVAL_TOP_K") {
            config.chat.top_k = top_k;
        }
        if let Ok(size) = env_parse("CHUNK_SIZE") {
            config.chat.chunk_size = size;
        }
        if let Ok(overlap) = env_parse("CHUNK_OVERLAP") {
            config.chat.chunk_overlap = overlap;
        }
        if let Ok(host) = std::env::var("SERVER_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env_parse("SERVER_PORT") {
            config.server.port = port;
        }

        config
    }

    pub fn assistant_options(&self) -> AssistantOptions {
        AssistantOptions {
            chunk_size: self.chat.chunk_size,
            chunk_overlap: self.chat.chunk_overlap,
            separator: self.chat.separator.clone(),
            top_k: self.chat.top_k,
            ..AssistantOptions::default()
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Result<T, ()> {
    std::env::var(key).map_err(|_| ())?.parse().map_err(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.chat.chunk_size, 1000);
        assert_eq!(config.chat.chunk_overlap, 200);
        assert_eq!(config.chat.separator, "\n");
        assert_eq!(config.chat.top_k, 4);
    }

    #[test]
    fn test_assistant_options_carry_chat_config() {
        let mut config = Config::default();
        config.chat.top_k = 7;
        config.chat.chunk_size = 512;

        let options = config.assistant_options();
        assert_eq!(options.top_k, 7);
        assert_eq!(options.chunk_size, 512);
        assert_eq!(options.chunk_overlap, 200);
    }
}
