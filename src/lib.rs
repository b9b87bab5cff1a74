// Public API exports
pub mod cli;
pub mod logging;
pub mod sandbox;
pub mod security;
pub mod tools;

// Re-export main types for convenience
pub use sandbox::{list_directory, DirEntry, EnumError, Listing, Sandbox};
pub use security::PathSanitizer;

pub use tools::{declarations, dispatch, get_files_info, ToolCall, ToolResponse};
