mod assistant;
mod indexer;
mod session;

#[cfg(test)]
pub(crate) mod fakes;

pub use assistant::{Assistant, AssistantOptions, ProcessReport};
pub use indexer::IndexService;
pub use session::{AskOutcome, ChatSession};
