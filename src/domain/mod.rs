pub mod entities;
pub mod errors;
pub mod ports;
pub mod text;

pub use entities::*;
pub use errors::{DomainError, Result};
pub use text::{normalize_prompt_text, split_text};
