use std::path::{Component, Path, PathBuf};

pub struct PathSanitizer;

impl PathSanitizer {
    /// Reinterpret a caller-supplied path as relative to the sandbox root.
    ///
    /// - Empty input and `.` map to `.` (the root itself)
    /// - Absolute paths (/etc, C:\Windows) lose their root marker and are
    ///   treated as root-relative instead of replacing the root on join
    /// - `.` and `..` components are kept; canonicalization resolves them and
    ///   the containment check decides whether the result is allowed
    pub fn root_relative(requested: &str) -> PathBuf {
        let mut relative = PathBuf::new();

        for component in Path::new(requested).components() {
            match component {
                // Strip root markers so join() can't discard the root
                Component::Prefix(_) | Component::RootDir => continue,
                Component::CurDir => continue,
                Component::ParentDir => relative.push(".."),
                Component::Normal(part) => relative.push(part),
            }
        }

        if relative.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            relative
        }
    }

    /// Segment-aware containment: `target` is the root or lies beneath it.
    ///
    /// `Path::starts_with` compares whole components, so `/work` does not
    /// contain `/workspace`. Both paths must already be canonical.
    pub fn is_contained(root: &Path, target: &Path) -> bool {
        target == root || target.starts_with(root)
    }

    /// Resolve `.` and `..` without touching the filesystem.
    ///
    /// Only used to classify paths that cannot be canonicalized because they
    /// don't exist. `..` never climbs above the filesystem root.
    pub fn normalize_lexically(path: &Path) -> PathBuf {
        let mut stack: Vec<Component> = Vec::new();

        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if matches!(stack.last(), Some(Component::Normal(_))) {
                        stack.pop();
                    }
                }
                other => stack.push(other),
            }
        }

        stack.iter().collect()
    }
}
