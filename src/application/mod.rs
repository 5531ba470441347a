//! Application layer - use cases and orchestration.
//!
//! Services here orchestrate domain logic through the domain ports (traits)
//! rather than concrete provider implementations.

pub mod services;

pub use services::{
    AskOutcome, Assistant, AssistantOptions, ChatSession, IndexService, ProcessReport,
};
