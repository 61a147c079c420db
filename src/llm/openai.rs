pub use async_openai::{
    Client, config::OpenAIConfig
};
use async_openai::types::{AssistantTools, CreateAssistantRequest, CreateAssistantRequestArgs};
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use futures::{FutureExt, future::BoxFuture};
use std::time::Duration;

use crate::assistant::{
    traits::Registrar,
    types::{AssistantSpec, CreatedAssistant, RegistrarResult},
};
use crate::config::Config;
use crate::llm::{error::LLMError, LLMResult};

/// Assistant registrar backed by the OpenAI Assistants API.
pub struct OpenAI {
    pub client: Client<OpenAIConfig>,
    api_base: String,
}

impl OpenAI {
    /// Build a registrar from resolved settings. Fails before any network
    /// traffic when the credential is missing.
    pub fn from_config(config: &Config) -> crate::error::Result<Self> {
        let api_key = config.require_api_key()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(LLMError::from)?;
        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(config.api_base.as_str());

        tracing::debug!(api_base = %config.api_base, timeout_secs = config.timeout_secs, "configured OpenAI client");
        Ok(Self {
            client: Client::with_config(openai_config)
                .with_http_client(http)
                .with_backoff(no_retry()),
            api_base: config.api_base.clone(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

/// A backoff that gives up immediately, so the first rate-limit or server
/// error is returned to the caller.
fn no_retry() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

/// Translate a spec into the Assistants API create request.
pub fn create_request(spec: &AssistantSpec) -> LLMResult<CreateAssistantRequest> {
    let tools: Vec<AssistantTools> = spec.tools.iter().map(|t| t.to_assistant_tool()).collect();
    let request = CreateAssistantRequestArgs::default()
        .model(spec.model.as_str())
        .name(spec.name.as_str())
        .instructions(spec.instructions.as_str())
        .tools(tools)
        .build()?;
    Ok(request)
}

impl OpenAI {
    /// Create the assistant. Errors from the API are returned as-is, with no
    /// translation or recovery.
    pub async fn create_assistant(&self, spec: &AssistantSpec) -> RegistrarResult<CreatedAssistant> {
        let request = create_request(spec)?;
        tracing::debug!(
            api_base = %self.api_base,
            model = %spec.model,
            tools = spec.tools.len(),
            "POST /assistants"
        );

        let assistant = self
            .client
            .assistants()
            .create(request)
            .await
            .map_err(LLMError::from)?;

        if assistant.id.trim().is_empty() {
            return Err(LLMError::InvalidResponse("assistant id is empty".to_string()).into());
        }

        Ok(CreatedAssistant {
            id: assistant.id,
            name: assistant.name,
            model: Some(assistant.model),
        })
    }
}

impl Registrar for OpenAI {
    fn register<'a>(&'a self, spec: &'a AssistantSpec) -> BoxFuture<'a, RegistrarResult<CreatedAssistant>> {
        self.create_assistant(spec).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::config::ConfigError;

    #[test]
    fn request_carries_name_model_instructions_and_tools() {
        let spec = AssistantSpec::developer(&Config::default());
        let request = create_request(&spec).unwrap();

        assert_eq!(request.model, "gpt-4-1106-preview");
        assert_eq!(request.name.as_deref(), Some("AI Developer"));
        assert_eq!(request.instructions.as_deref(), Some(spec.instructions.as_str()));

        let tools = request.tools.expect("tools");
        assert_eq!(tools.len(), 11);
        match &tools[9] {
            AssistantTools::Function(f) => {
                assert_eq!(f.function.name, "file_search");
                assert_eq!(f.function.parameters, Some(spec.tools[9].parameters()));
            }
            other => panic!("expected function tool, got {:?}", other),
        }
    }

    #[test]
    fn from_config_requires_api_key() {
        let err = OpenAI::from_config(&Config::default()).err().expect("missing key");
        assert!(matches!(err, Error::Config(ConfigError::MissingConfig(_))));
    }

    #[test]
    fn backoff_never_retries() {
        use backoff::backoff::Backoff;
        let mut backoff = no_retry();
        assert_eq!(backoff.next_backoff(), None);
    }

    #[test]
    fn from_config_keeps_api_base() {
        let config = Config {
            api_key: Some("sk-test".into()),
            api_base: "http://127.0.0.1:9/v1".into(),
            ..Config::default()
        };
        let openai = OpenAI::from_config(&config).unwrap();
        assert_eq!(openai.api_base(), "http://127.0.0.1:9/v1");
    }
}
