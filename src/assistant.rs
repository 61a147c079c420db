use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::prompt::DEVELOPER_INSTRUCTIONS;
use crate::tools::{catalog, schema::validate_tool_set};

pub mod types;
pub mod error;
pub mod traits;

use traits::Registrar;
use types::{AssistantSpec, CreatedAssistant};

impl AssistantSpec {
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        instructions: impl Into<String>,
        tools: Vec<crate::tools::ToolSchema>,
    ) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            instructions: instructions.into(),
            tools,
        }
    }

    /// The AI Developer assistant: fixed instructions and tool set, with
    /// name and model taken from `config`.
    pub fn developer(config: &Config) -> Self {
        Self::new(
            config.name.clone(),
            config.model.clone(),
            DEVELOPER_INSTRUCTIONS,
            catalog::developer_tools(),
        )
    }

    pub fn tool_set_json(&self) -> serde_json::Value {
        catalog::tool_set_json(&self.tools)
    }
}

/// Write the two report lines for a created assistant.
pub fn report<W: Write>(out: &mut W, spec: &AssistantSpec, created: &CreatedAssistant) -> std::io::Result<()> {
    writeln!(out, "{} Assistant created, copy its id to .env file:", spec.name)?;
    writeln!(out, "{}", created.id)?;
    out.flush()
}

/// Validate the tool set, register `spec` and report the returned id on `out`.
///
/// Nothing is written to `out` unless registration succeeded.
pub async fn register_and_report<R, W>(registrar: &R, spec: &AssistantSpec, out: &mut W) -> Result<CreatedAssistant>
where
    R: Registrar + ?Sized,
    W: Write,
{
    validate_tool_set(&spec.tools).map_err(error::RegistrarError::from)?;
    tracing::info!(name = %spec.name, model = %spec.model, tools = spec.tools.len(), "registering assistant");

    let created = registrar.register(spec).await?;
    tracing::info!(id = %created.id, "assistant created");

    report(out, spec, &created)?;
    Ok(created)
}
