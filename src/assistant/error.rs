use crate::llm::error::LLMError;
use crate::tools::error::ToolError;

#[derive(Debug, thiserror::Error)]
pub enum RegistrarError {
    #[error("Invalid tool set: {0}")]
    InvalidToolSet(#[from] ToolError),

    #[error("LLM error: {0}")]
    LLMExecutionError(#[from] LLMError),
}
