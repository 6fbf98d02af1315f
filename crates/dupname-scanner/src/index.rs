//! Per-tree filename index

use crate::error::{MatchResult, TreeSide};
use crate::names::{is_hidden_artifact, normalize};
use crate::options::MatchOptions;
use crate::walk::TreeWalk;
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Normalized filename to every path in one tree that produced it
///
/// Paths keep the order in which the walk found them. An index cannot be
/// changed once built.
#[derive(Debug, Clone, Default)]
pub struct FileIndex {
    entries: HashMap<OsString, Vec<PathBuf>>,
    file_count: usize,
}

impl FileIndex {
    /// Walk `root` and index every non-hidden file under it
    ///
    /// Without `options.recursive` only the root itself is listed: its
    /// subdirectories are never opened.
    ///
    /// # Errors
    /// Returns the first error the walk hits; no partial index is returned.
    pub fn build(root: &Path, side: TreeSide, options: &MatchOptions) -> MatchResult<Self> {
        tracing::debug!(%side, root = %root.display(), recursive = options.recursive, "indexing tree");

        let mut index = Self::default();
        let mut walk = if options.recursive {
            TreeWalk::new(root, side)
        } else {
            TreeWalk::flat(root, side)
        };

        while let Some(entry) = walk.next() {
            let entry = entry?;

            if entry.is_dir {
                if !entry.is_root() && !options.recursive {
                    tracing::trace!(path = %entry.path.display(), "skipping subdirectory");
                    walk.skip_subtree();
                }
                continue;
            }

            if is_hidden_artifact(&entry.name.to_string_lossy()) {
                tracing::trace!(path = %entry.path.display(), "skipping system file");
                continue;
            }

            let key = normalize(&entry.name, options);
            index.entries.entry(key).or_default().push(entry.path);
            index.file_count += 1;
        }

        tracing::info!(
            %side,
            files = index.file_count,
            names = index.entries.len(),
            "indexed tree"
        );
        Ok(index)
    }

    /// Paths indexed under a normalized name
    #[must_use]
    pub fn get(&self, name: &OsStr) -> Option<&[PathBuf]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Check whether a normalized name is present
    #[must_use]
    pub fn contains(&self, name: &OsStr) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate over the distinct normalized names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &OsStr> {
        self.entries.keys().map(OsString::as_os_str)
    }

    /// Number of distinct normalized names
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no file was indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of files indexed
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.file_count
    }
}
