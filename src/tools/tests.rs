#[cfg(test)]
mod tests {
    use crate::tools::{declarations, dispatch, get_files_info, ToolCall, ToolResponse};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn workdir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.py"), b"print(1)").unwrap();
        fs::create_dir(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("pkg/tests.py"), b"").unwrap();
        dir
    }

    fn call(name: &str, args: serde_json::Value) -> ToolCall {
        ToolCall {
            name: name.to_string(),
            args,
        }
    }

    #[test]
    fn test_get_files_info_defaults_to_root() {
        let dir = workdir();
        let result = get_files_info(dir.path(), None);
        assert!(result.contains("- main.py: file_size=8 bytes, is_dir=False"));
        assert!(result.contains("- pkg: file_size="));
        assert_eq!(result.lines().count(), 2);
    }

    #[test]
    fn test_get_files_info_subdirectory() {
        let dir = workdir();
        let result = get_files_info(dir.path(), Some("pkg"));
        assert_eq!(result, "- tests.py: file_size=0 bytes, is_dir=False");
    }

    #[test]
    fn test_get_files_info_outside_root() {
        let dir = workdir();
        let result = get_files_info(dir.path(), Some("../"));
        assert_eq!(
            result,
            "Error: Cannot list \"../\" as it is outside the permitted working directory"
        );
    }

    #[test]
    fn test_get_files_info_file_is_error() {
        let dir = workdir();
        let result = get_files_info(dir.path(), Some("main.py"));
        assert_eq!(result, "Error: \"main.py\" is not a directory");
    }

    #[test]
    fn test_dispatch_get_files_info() {
        let dir = workdir();
        let response = dispatch(&call("get_files_info", json!({"directory": "pkg"})), dir.path());
        assert_eq!(
            response,
            ToolResponse::ok(
                "get_files_info",
                "- tests.py: file_size=0 bytes, is_dir=False".to_string()
            )
        );
    }

    #[test]
    fn test_dispatch_without_args() {
        let dir = workdir();
        let response = dispatch(&call("get_files_info", serde_json::Value::Null), dir.path());
        assert!(!response.is_error);
        assert_eq!(response.result.lines().count(), 2);
    }

    #[test]
    fn test_dispatch_escape_is_error() {
        let dir = workdir();
        let response = dispatch(
            &call("get_files_info", json!({"directory": "../../etc"})),
            dir.path(),
        );
        assert!(response.is_error);
        assert!(response.result.starts_with("Error: Cannot list"));
    }

    #[test]
    fn test_dispatch_unknown_tool() {
        let dir = workdir();
        let response = dispatch(&call("write_file", json!({})), dir.path());
        assert!(response.is_error);
        assert_eq!(response.result, "Error: Unknown function: write_file");
    }

    #[test]
    fn test_dispatch_rejects_non_string_directory() {
        let dir = workdir();
        let response = dispatch(&call("get_files_info", json!({"directory": 42})), dir.path());
        assert!(response.is_error);
        assert!(response.result.contains("expected a string"));
    }

    #[test]
    fn test_dispatch_rejects_non_object_args() {
        let dir = workdir();
        let response = dispatch(&call("get_files_info", json!(["pkg"])), dir.path());
        assert!(response.is_error);
        assert!(response.result.contains("expected an object"));
    }

    #[test]
    fn test_tool_call_deserializes_without_args() {
        let parsed: ToolCall = serde_json::from_str(r#"{"name": "get_files_info"}"#).unwrap();
        assert_eq!(parsed.name, "get_files_info");
        assert!(parsed.args.is_null());
    }

    #[test]
    fn test_ok_response_omits_error_flag() {
        let response = ToolResponse::ok("get_files_info", String::new());
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("is_error").is_none());
    }

    #[test]
    fn test_declarations_describe_get_files_info() {
        let decls = declarations();
        let list = decls.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["name"], "get_files_info");
        assert_eq!(
            list[0]["parameters"]["properties"]["directory"]["type"],
            "string"
        );
    }
}
