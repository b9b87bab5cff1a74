mod entry;
mod error;
mod listing;


pub use entry::DirEntry;
pub use error::EnumError;
pub use listing::Listing;

use crate::security::PathSanitizer;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Read-only view of a single working directory.
///
/// Every listing request is resolved against the canonical root and
/// rejected unless the resolved target is the root or lies beneath it.
#[derive(Debug, Clone)]
pub struct Sandbox {
    /// Canonical absolute root, resolved once at open
    root: PathBuf,
}

impl Sandbox {
    /// Canonicalize the root; fails with `InvalidRoot` if it can't be resolved
    pub fn open(root: impl AsRef<Path>) -> Result<Self, EnumError> {
        let root = root.as_ref();
        let canonical = fs::canonicalize(root).map_err(|e| EnumError::InvalidRoot {
            root: root.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { root: canonical })
    }

    /// The canonical root every request is checked against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List the immediate children of `requested`, interpreted relative to the root
    pub fn list_directory(&self, requested: &str) -> Result<Listing, EnumError> {
        let target = self.resolve(requested)?;

        // Canonical targets are symlink-free, so this is the directory itself
        let metadata = fs::metadata(&target).map_err(|e| stat_error(requested, e))?;

        if !metadata.is_dir() {
            return Err(EnumError::NotADirectory {
                requested: requested.to_string(),
            });
        }

        read_children(&target)
    }

    /// Join, canonicalize and containment-check a requested path
    fn resolve(&self, requested: &str) -> Result<PathBuf, EnumError> {
        let joined = self.root.join(PathSanitizer::root_relative(requested));

        match fs::canonicalize(&joined) {
            Ok(target) if PathSanitizer::is_contained(&self.root, &target) => Ok(target),
            Ok(_) => Err(EnumError::OutsideRoot {
                requested: requested.to_string(),
            }),
            Err(err) => Err(self.classify_unresolvable(&joined, requested, err)),
        }
    }

    /// Pick the error for a path that can't be canonicalized (usually missing).
    ///
    /// Escaping paths must report `OutsideRoot` whether or not they exist.
    /// Every ancestor of the unnormalized join is canonicalized, so `..`
    /// applies after a symlink is followed (`link/../x` climbs from the link
    /// target). If any of them lands outside the root the request escapes,
    /// whatever lies past it. The lexical form is checked as well.
    fn classify_unresolvable(
        &self,
        joined: &Path,
        requested: &str,
        err: std::io::Error,
    ) -> EnumError {
        let lexical = PathSanitizer::normalize_lexically(joined);

        let ancestor_escapes = joined
            .ancestors()
            .take_while(|ancestor| ancestor.starts_with(&self.root))
            .filter_map(|ancestor| fs::canonicalize(ancestor).ok())
            .any(|resolved| !PathSanitizer::is_contained(&self.root, &resolved));

        if !PathSanitizer::is_contained(&self.root, &lexical) || ancestor_escapes {
            return EnumError::OutsideRoot {
                requested: requested.to_string(),
            };
        }

        match err.kind() {
            std::io::ErrorKind::PermissionDenied => EnumError::Io(err.to_string()),
            _ => EnumError::NotADirectory {
                requested: requested.to_string(),
            },
        }
    }
}

/// Open `root` and list `requested` beneath it in one call
pub fn list_directory(root: impl AsRef<Path>, requested: &str) -> Result<Listing, EnumError> {
    Sandbox::open(root)?.list_directory(requested)
}

/// Map a failed stat of the resolved target: vanished means not a directory,
/// anything else is an I/O failure
fn stat_error(requested: &str, err: std::io::Error) -> EnumError {
    match err.kind() {
        std::io::ErrorKind::NotFound => EnumError::NotADirectory {
            requested: requested.to_string(),
        },
        _ => EnumError::Io(err.to_string()),
    }
}

/// Enumerate one level of `dir` without following symlinks.
///
/// Any failure discards the partial result; the walker (and its directory
/// handle) is dropped on every return path.
fn read_children(dir: &Path) -> Result<Listing, EnumError> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    let mut entries = Vec::new();
    for item in walker {
        let item = item.map_err(|e| EnumError::Io(e.to_string()))?;

        // lstat semantics: a symlink reports itself, never its target
        let metadata = item.metadata().map_err(|e| EnumError::Io(e.to_string()))?;

        entries.push(DirEntry {
            name: item.file_name().to_string_lossy().into_owned(),
            size: metadata.len(),
            is_dir: metadata.is_dir(),
        });
    }

    Ok(Listing::new(entries))
}
