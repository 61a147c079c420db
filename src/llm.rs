pub mod openai;
pub mod error;

pub use openai::OpenAI;

/// Result type for calls into the hosted model provider.
pub type LLMResult<T> = std::result::Result<T, error::LLMError>;
