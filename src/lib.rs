pub mod tools;
pub mod assistant;
pub mod llm;
pub mod prompt;
pub mod config;
pub mod env_file;
pub mod cli;
pub mod error;

pub use assistant::{register_and_report, report};
pub use assistant::traits::Registrar;
pub use assistant::types::{AssistantSpec, CreatedAssistant};
pub use config::Config;
pub use error::{Error, Result};
pub use llm::OpenAI;
