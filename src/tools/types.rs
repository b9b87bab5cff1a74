use serde::{Deserialize, Serialize};

/// A function call requested by a model: tool name plus JSON arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub args: serde_json::Value,
}

/// Text handed back to the caller for a single tool call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolResponse {
    pub name: String,
    pub result: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ToolResponse {
    pub fn ok(name: impl Into<String>, result: String) -> Self {
        Self {
            name: name.into(),
            result,
            is_error: false,
        }
    }

    /// Error results always carry the `Error: ` prefix callers look for
    pub fn error(name: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self {
            name: name.into(),
            result: format!("Error: {}", message),
            is_error: true,
        }
    }
}
