//! The fixed tool set of the AI Developer assistant.
//!
//! Only schemas live here. The tools are executed by whoever drives the
//! assistant's runs; `e2b_data_analysis` and `duckduckgo_search` name
//! external providers and are declared as opaque capabilities.

use serde_json::Value;

use super::schema::{ArgSchema, ToolSchema};

const E2B_DESCRIPTION: &str = "Evaluates python code in a sandbox environment. The environment is long-running and exists across multiple executions. You must send the whole script every time and print your outputs. Script should be pure python code that can be evaluated. It should be in python format NOT markdown. The code should NOT be wrapped in backticks. All python packages including requests, matplotlib, scipy, numpy, pandas, etc are available. Create and display chart using `plt.show()`.";

const DUCKDUCKGO_DESCRIPTION: &str = "A wrapper around DuckDuckGo Search. Useful for when you need to answer questions about current events. Input should be a search query.";

/// The 11 tools registered with the assistant, in registration order.
pub fn developer_tools() -> Vec<ToolSchema> {
    vec![
        ToolSchema::new(
            "create_directory",
            "Create a directory",
            vec![ArgSchema::string("path", "The path to the directory to be created")],
        ),
        ToolSchema::new(
            "save_content_to_file",
            "Save content (code or text) to file",
            vec![
                ArgSchema::string("content", "The content to save"),
                ArgSchema::string("path", "The path to the file, including extension"),
            ],
        ),
        ToolSchema::new(
            "list_files",
            "List files in a directory",
            vec![ArgSchema::string("path", "The path to the directory")],
        ),
        ToolSchema::new(
            "read_file",
            "Read a file",
            vec![ArgSchema::string("path", "The path to the file")],
        ),
        ToolSchema::new(
            "commit",
            "Commit changes to the repo",
            vec![ArgSchema::string("message", "The commit message")],
        ),
        ToolSchema::new(
            "make_pull_request",
            "Creates a new branch and makes a pull request",
            vec![ArgSchema::string("title", "The title of the pull request")],
        ),
        ToolSchema::new(
            "e2b_data_analysis",
            E2B_DESCRIPTION,
            vec![
                ArgSchema::string(
                    "python_code",
                    "The python script to be evaluated. The contents will be in main.py. It should not be in markdown format.",
                )
                .with_example("print('Hello World')"),
            ],
        ),
        ToolSchema::new(
            "duckduckgo_search",
            DUCKDUCKGO_DESCRIPTION,
            vec![ArgSchema::string("query", "Search query to look up")],
        ),
        ToolSchema::new(
            "copy_file",
            "Create a copy of a file in a specified location",
            vec![
                ArgSchema::string("source_path", "Path of the file to copy"),
                ArgSchema::string("destination_path", "Path to save the copied file"),
            ],
        ),
        ToolSchema::new(
            "file_search",
            "Recursively search for files in a subdirectory that match the regex pattern",
            vec![
                ArgSchema::string("dir_path", "Subdirectory to search in.").with_default("."),
                ArgSchema::string("pattern", "Unix shell regex, where * matches everything."),
            ],
        ),
        ToolSchema::new(
            "move_file",
            "Move or rename a file from one location to another",
            vec![
                ArgSchema::string("source_path", "Path of the file to move"),
                ArgSchema::string("destination_path", "New path for the moved file"),
            ],
        ),
    ]
}

/// The tool set as a JSON array of OpenAI function tools.
pub fn tool_set_json(tools: &[ToolSchema]) -> Value {
    Value::Array(tools.iter().map(ToolSchema::to_function_json).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::schema::validate_tool_set;

    fn find<'a>(tools: &'a [ToolSchema], name: &str) -> &'a ToolSchema {
        tools
            .iter()
            .find(|t| t.name == name)
            .unwrap_or_else(|| panic!("missing tool {name}"))
    }

    #[test]
    fn declares_eleven_tools_in_order() {
        let names: Vec<String> = developer_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "create_directory",
                "save_content_to_file",
                "list_files",
                "read_file",
                "commit",
                "make_pull_request",
                "e2b_data_analysis",
                "duckduckgo_search",
                "copy_file",
                "file_search",
                "move_file",
            ]
        );
    }

    #[test]
    fn required_parameters_match_declarations() {
        let tools = developer_tools();
        let expected: [(&str, &[&str]); 11] = [
            ("create_directory", &["path"]),
            ("save_content_to_file", &["content", "path"]),
            ("list_files", &["path"]),
            ("read_file", &["path"]),
            ("commit", &["message"]),
            ("make_pull_request", &["title"]),
            ("e2b_data_analysis", &["python_code"]),
            ("duckduckgo_search", &["query"]),
            ("copy_file", &["source_path", "destination_path"]),
            ("file_search", &["pattern"]),
            ("move_file", &["source_path", "destination_path"]),
        ];
        for (name, required) in expected {
            assert_eq!(find(&tools, name).required(), required.to_vec(), "tool {name}");
        }
    }

    #[test]
    fn file_search_dir_path_defaults_to_cwd() {
        let tools = developer_tools();
        let dir_path = find(&tools, "file_search").arg("dir_path").expect("dir_path");
        assert!(!dir_path.required);
        assert_eq!(dir_path.default, Some(Value::from(".")));
    }

    #[test]
    fn sandbox_tool_has_example() {
        let tools = developer_tools();
        let params = find(&tools, "e2b_data_analysis").parameters();
        assert_eq!(params["properties"]["python_code"]["example"], "print('Hello World')");
    }

    #[test]
    fn every_parameter_is_a_string() {
        for tool in developer_tools() {
            for arg in &tool.args {
                assert_eq!(arg.arg_type, "string", "{}.{}", tool.name, arg.name);
            }
        }
    }

    #[test]
    fn tool_set_is_valid() {
        validate_tool_set(&developer_tools()).expect("catalog should validate");
    }

    #[test]
    fn serialization_is_byte_identical_across_builds() {
        let first = serde_json::to_string(&tool_set_json(&developer_tools())).unwrap();
        let second = serde_json::to_string(&tool_set_json(&developer_tools())).unwrap();
        assert_eq!(first, second);
    }
}
