use serde::{Deserialize, Serialize};

use crate::tools::schema::ToolSchema;
use super::error::RegistrarError;

/// Everything sent to the assistant-creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantSpec {
    pub name: String,
    pub model: String,
    pub instructions: String,
    pub tools: Vec<ToolSchema>,
}

/// What the remote service handed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedAssistant {
    /// Opaque identifier, printed unchanged.
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

pub type RegistrarResult<T> = Result<T, RegistrarError>;
