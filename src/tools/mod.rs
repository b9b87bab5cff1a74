mod types;

#[cfg(test)]
mod tests;

pub use types::{ToolCall, ToolResponse};

use crate::sandbox::list_directory;
use serde_json::{json, Value};
use std::path::Path;

pub const GET_FILES_INFO: &str = "get_files_info";

/// Run the directory listing tool and return the text a model should see.
///
/// The result is either the formatted listing or an `Error: ...` line.
pub fn get_files_info(working_directory: &Path, directory: Option<&str>) -> String {
    run_get_files_info(working_directory, directory.unwrap_or(".")).result
}

/// Dispatch a tool call against the host-configured working directory.
///
/// The working directory never comes from the call's arguments.
pub fn dispatch(call: &ToolCall, working_directory: &Path) -> ToolResponse {
    tracing::debug!("Dispatching tool call {} with args {}", call.name, call.args);

    let response = match call.name.as_str() {
        GET_FILES_INFO => match directory_arg(&call.args) {
            Ok(directory) => run_get_files_info(working_directory, directory.unwrap_or(".")),
            Err(message) => ToolResponse::error(GET_FILES_INFO, message),
        },
        other => ToolResponse::error(other, format!("Unknown function: {}", other)),
    };

    if response.is_error {
        tracing::warn!("Tool call {} failed: {}", call.name, response.result);
    } else {
        tracing::info!("Tool call {} succeeded", call.name);
    }

    response
}

/// Function declarations for every tool this crate can dispatch
pub fn declarations() -> Value {
    json!([
        {
            "name": GET_FILES_INFO,
            "description": "Lists files in the specified directory along with their sizes, constrained to the working directory.",
            "parameters": {
                "type": "object",
                "properties": {
                    "directory": {
                        "type": "string",
                        "description": "The directory to list files from, relative to the working directory. If not provided, lists files in the working directory itself."
                    }
                }
            }
        }
    ])
}

fn run_get_files_info(working_directory: &Path, directory: &str) -> ToolResponse {
    match list_directory(working_directory, directory) {
        Ok(listing) => ToolResponse::ok(GET_FILES_INFO, listing.render()),
        Err(e) => ToolResponse::error(GET_FILES_INFO, e),
    }
}

/// Extract the optional `directory` string argument
fn directory_arg(args: &Value) -> Result<Option<&str>, String> {
    match args {
        Value::Null => Ok(None),
        Value::Object(map) => match map.get("directory") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(format!(
                "Invalid argument \"directory\": expected a string, got {}",
                other
            )),
        },
        other => Err(format!("Invalid arguments: expected an object, got {}", other)),
    }
}
