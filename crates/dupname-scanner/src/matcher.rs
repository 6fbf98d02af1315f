//! Cross-tree filename matching

use crate::error::{MatchError, MatchResult, TreeSide};
use crate::index::FileIndex;
use crate::options::MatchOptions;
use crate::types::{MatchRecord, MatchReport};
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Compares two directory trees by filename
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectoryMatcher {
    options: MatchOptions,
}

impl DirectoryMatcher {
    /// Create a matcher with the given options
    #[must_use]
    pub fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    /// Resolve both roots, index them in order and intersect the indexes
    ///
    /// Both paths are resolved before any traversal.
    ///
    /// # Errors
    /// Returns an error if either root cannot be resolved or walked
    pub fn compare(&self, dir1: &Path, dir2: &Path) -> MatchResult<MatchReport> {
        let root1 = resolve_root(dir1, TreeSide::First)?;
        let root2 = resolve_root(dir2, TreeSide::Second)?;
        self.compare_roots(root1, root2)
    }

    /// Index two already resolved roots in order and intersect the indexes
    ///
    /// The first tree is fully indexed before the second one is touched, so a
    /// walk error in the first tree is returned without walking the second.
    ///
    /// # Errors
    /// Returns an error if either tree cannot be walked
    pub fn compare_roots(&self, root1: PathBuf, root2: PathBuf) -> MatchResult<MatchReport> {
        let first = FileIndex::build(&root1, TreeSide::First, &self.options)?;
        let second = FileIndex::build(&root2, TreeSide::Second, &self.options)?;

        let matches = find_matches(&first, &second);
        tracing::info!(matches = matches.len(), "comparison complete");

        Ok(MatchReport {
            root1,
            root2,
            options: self.options,
            matches,
        })
    }
}

/// Pair up every path sharing a normalized name across two indexes
///
/// Shared names are emitted in ascending order. Within a name every path of
/// the first index is paired with every path of the second, first-index
/// paths in the outer loop. Names that are not valid UTF-8 are matched on
/// their raw bytes and only converted lossily for the record.
#[must_use]
pub fn find_matches(first: &FileIndex, second: &FileIndex) -> Vec<MatchRecord> {
    let mut shared: Vec<&OsStr> = first.names().filter(|name| second.contains(name)).collect();
    shared.sort_unstable();

    let mut matches = Vec::new();
    for name in shared {
        let (Some(paths1), Some(paths2)) = (first.get(name), second.get(name)) else {
            continue;
        };
        let filename = name.to_string_lossy().into_owned();
        tracing::debug!(%filename, left = paths1.len(), right = paths2.len(), "shared name");
        for path1 in paths1 {
            for path2 in paths2 {
                matches.push(MatchRecord {
                    filename: filename.clone(),
                    path1: path1.clone(),
                    path2: path2.clone(),
                });
            }
        }
    }
    matches
}

/// Turn a user-supplied path into an absolute, existing directory
///
/// Relative paths are joined onto the current directory and then cleaned
/// lexically; symlinks are not resolved.
///
/// # Errors
/// Returns an error if the current directory cannot be read, or the result
/// does not exist or is not a directory
pub fn resolve_root(input: &Path, side: TreeSide) -> MatchResult<PathBuf> {
    let absolute = if input.is_absolute() {
        input.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|source| MatchError::CurrentDir { side, source })?;
        cwd.join(input)
    };
    let path = clean_path(&absolute);

    let metadata = fs::metadata(&path).map_err(|source| MatchError::Resolve {
        side,
        path: path.clone(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(MatchError::NotADirectory { side, path });
    }

    tracing::debug!(%side, path = %path.display(), "resolved root");
    Ok(path)
}

/// Drop `.` components and fold `..` into its parent
fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                cleaned.pop();
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}
