use serde::Serialize;
use std::fmt;

/// One immediate child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DirEntry {
    /// File name only, never a path
    pub name: String,
    /// Size in bytes as reported by the entry's own metadata
    pub size: u64,
    /// Whether the entry itself is a directory (symlinks are not followed)
    pub is_dir: bool,
}

impl fmt::Display for DirEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let is_dir = if self.is_dir { "True" } else { "False" };
        write!(
            f,
            "- {}: file_size={} bytes, is_dir={}",
            self.name, self.size, is_dir
        )
    }
}
