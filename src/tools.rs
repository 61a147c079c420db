pub mod schema;
pub mod catalog;
pub mod error;

pub use catalog::{developer_tools, tool_set_json};
pub use schema::{ArgSchema, ToolSchema, validate_tool_set};
