
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool name must not be empty")]
    EmptyName,

    #[error("Duplicate tool: {0}")]
    DuplicateTool(String),

    #[error("Duplicate parameter '{arg}' in tool '{name}'")]
    DuplicateArg {
        name: String,
        arg: String,
    },

    #[error("Unsupported type '{arg_type}' for parameter '{arg}' in tool '{name}'")]
    UnsupportedType {
        name: String,
        arg: String,
        arg_type: String,
    },
}
