//! Tool trait definition and types.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ToolError;

/// Arguments passed to a tool for execution.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Parameters as key-value pairs.
    pub params: HashMap<String, Value>,
}

impl ToolArgs {
    /// Create new tool arguments with the given parameters.
    pub fn new(params: HashMap<String, Value>) -> Self {
        Self { params }
    }

    /// Get a string parameter, returning an error if missing or not a string.
    pub fn get_string(&self, key: &str) -> Result<String, ToolError> {
        self.params
            .get(key)
            .ok_or_else(|| ToolError::MissingParameter(key.to_string()))?
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected string".to_string(),
            })
    }
}

/// Output from a tool execution.
///
/// Tools only fail through [`ToolError`]; an upstream outage is still an
/// output, carrying the "Unable to fetch…" sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The report text.
    pub content: String,
}

impl ToolOutput {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Name, description and argument schema of a tool, as advertised to hosts.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// A named operation that takes JSON arguments and returns text.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for dispatch).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// JSON Schema for the `params` object.
    fn input_schema(&self) -> Value;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

/// Schema for tools that take a single required string argument.
pub fn single_string_schema(key: &str, description: &str) -> Value {
    let mut properties = serde_json::Map::new();
    properties.insert(
        key.to_string(),
        serde_json::json!({
            "type": "string",
            "description": description,
        }),
    );

    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": [key],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_string() {
        let mut params = HashMap::new();
        params.insert("player_name".to_string(), Value::String("hikaru".to_string()));
        params.insert("count".to_string(), Value::from(3));
        let args = ToolArgs::new(params);

        assert_eq!(args.get_string("player_name").unwrap(), "hikaru");
        assert!(matches!(
            args.get_string("missing"),
            Err(ToolError::MissingParameter(_))
        ));
        assert!(matches!(
            args.get_string("count"),
            Err(ToolError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_single_string_schema() {
        let schema = single_string_schema("title", "Title code");
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["title"]["type"], "string");
        assert_eq!(schema["required"][0], "title");
    }
}
