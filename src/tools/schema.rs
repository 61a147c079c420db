use std::collections::HashSet;

use async_openai::types::{AssistantTools, AssistantToolsFunction, FunctionObject};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::error::ToolError;

/// JSON Schema primitive type names accepted for a parameter.
pub const PRIMITIVE_TYPES: [&str; 6] = ["string", "boolean", "integer", "number", "array", "object"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgSchema {
    pub name: String,
    pub arg_type: String,
    pub description: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

impl ArgSchema {
    /// A required string parameter.
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arg_type: "string".into(),
            description: description.into(),
            required: true,
            default: None,
            example: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Attach a default value. A parameter with a default is never required.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self.required = false;
        self
    }

    pub fn with_example(mut self, example: impl Into<Value>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// The JSON Schema property object for this parameter.
    pub fn property(&self) -> Value {
        let mut prop = Map::new();
        prop.insert("type".into(), Value::String(self.arg_type.clone()));
        prop.insert("description".into(), Value::String(self.description.clone()));
        if let Some(default) = &self.default {
            prop.insert("default".into(), default.clone());
        }
        if let Some(example) = &self.example {
            prop.insert("example".into(), example.clone());
        }
        Value::Object(prop)
    }
}

/// A named function descriptor exposed to the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub args: Vec<ArgSchema>,
}

impl ToolSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>, args: Vec<ArgSchema>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            args,
        }
    }

    pub fn arg(&self, name: &str) -> Option<&ArgSchema> {
        self.args.iter().find(|a| a.name == name)
    }

    /// Names of the required parameters, in declaration order.
    pub fn required(&self) -> Vec<&str> {
        self.args
            .iter()
            .filter(|a| a.required)
            .map(|a| a.name.as_str())
            .collect()
    }

    /// The `parameters` object of an OpenAI function tool.
    ///
    /// Properties keep declaration order, so the same schema always
    /// serializes to the same bytes.
    pub fn parameters(&self) -> Value {
        let properties: Map<String, Value> = self
            .args
            .iter()
            .map(|a| (a.name.clone(), a.property()))
            .collect();
        json!({
            "type": "object",
            "properties": properties,
            "required": self.required(),
        })
    }

    /// `{"type": "function", "function": {...}}` as sent on the wire.
    pub fn to_function_json(&self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters(),
            }
        })
    }

    pub fn to_assistant_tool(&self) -> AssistantTools {
        AssistantTools::Function(AssistantToolsFunction {
            function: FunctionObject {
                name: self.name.clone(),
                description: Some(self.description.clone()),
                parameters: Some(self.parameters()),
                strict: None,
            },
        })
    }

    pub fn validate(&self) -> Result<(), ToolError> {
        if self.name.trim().is_empty() {
            return Err(ToolError::EmptyName);
        }
        let mut seen = HashSet::new();
        for arg in &self.args {
            if !seen.insert(arg.name.as_str()) {
                return Err(ToolError::DuplicateArg {
                    name: self.name.clone(),
                    arg: arg.name.clone(),
                });
            }
            if !PRIMITIVE_TYPES.contains(&arg.arg_type.as_str()) {
                return Err(ToolError::UnsupportedType {
                    name: self.name.clone(),
                    arg: arg.name.clone(),
                    arg_type: arg.arg_type.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Validate every tool and reject duplicate tool names.
pub fn validate_tool_set(tools: &[ToolSchema]) -> Result<(), ToolError> {
    let mut names = HashSet::new();
    for tool in tools {
        tool.validate()?;
        if !names.insert(tool.name.as_str()) {
            return Err(ToolError::DuplicateTool(tool.name.clone()));
        }
    }
    Ok(())
}
