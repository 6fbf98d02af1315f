//! Lazy depth-first traversal of one directory tree
//!
//! `TreeWalk` yields every entry under a root, the root included. Callers that
//! do not want a directory's contents call [`TreeWalk::skip_subtree`] right
//! after the directory is yielded. Dropping the iterator stops the walk.
//!
//! A flat walk lists the root's own entries and nothing else: subdirectories
//! are yielded but never opened.

use crate::error::{MatchError, MatchResult, TreeSide};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One filesystem entry produced by a tree walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Full path of the entry (absolute when the root is absolute)
    pub path: PathBuf,
    /// Final path component, exactly as stored on disk
    pub name: OsString,
    /// Whether the entry is a directory (symlinks are never directories)
    pub is_dir: bool,
    /// Distance from the root; the root itself is depth 0
    pub depth: usize,
}

impl WalkEntry {
    /// Whether this entry is the walk root
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}

impl From<walkdir::DirEntry> for WalkEntry {
    fn from(entry: walkdir::DirEntry) -> Self {
        Self {
            name: entry.file_name().to_os_string(),
            is_dir: entry.file_type().is_dir(),
            depth: entry.depth(),
            path: entry.into_path(),
        }
    }
}

enum Source {
    /// Full descent, driven by walkdir
    Tree(walkdir::IntoIter),
    /// Flat walk, root not yet yielded
    Root(PathBuf),
    /// Flat walk, root yielded, children not yet listed
    Children(PathBuf),
    /// Flat walk, children listed and sorted
    Listed(std::vec::IntoIter<WalkEntry>),
    Done,
}

/// Iterator over the entries of one tree
pub struct TreeWalk {
    side: TreeSide,
    source: Source,
}

impl TreeWalk {
    /// Walk `root` and everything below it
    ///
    /// Siblings are visited in file-name order and symbolic links are not
    /// followed. Nothing is read from disk until the first call to `next`.
    #[must_use]
    pub fn new(root: &Path, side: TreeSide) -> Self {
        let inner = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();
        Self {
            side,
            source: Source::Tree(inner),
        }
    }

    /// Walk `root` and its direct children only
    ///
    /// Only the root directory is ever listed. Children come in file-name
    /// order.
    #[must_use]
    pub fn flat(root: &Path, side: TreeSide) -> Self {
        Self {
            side,
            source: Source::Root(root.to_path_buf()),
        }
    }

    /// Do not descend into the directory that was yielded last
    ///
    /// Has no effect on the remaining siblings of that directory. A flat walk
    /// never descends, so there it does nothing.
    pub fn skip_subtree(&mut self) {
        if let Source::Tree(inner) = &mut self.source {
            inner.skip_current_dir();
        }
    }

    fn advance_flat(&mut self) -> Option<MatchResult<WalkEntry>> {
        let side = self.side;
        match std::mem::replace(&mut self.source, Source::Done) {
            Source::Root(root) => {
                let entry = root_entry(&root, side);
                if matches!(&entry, Ok(e) if e.is_dir) {
                    self.source = Source::Children(root);
                }
                Some(entry)
            }
            Source::Children(root) => match list_children(&root, side) {
                Ok(children) => {
                    let mut children = children.into_iter();
                    let first = children.next();
                    self.source = Source::Listed(children);
                    first.map(Ok)
                }
                Err(e) => Some(Err(e)),
            },
            other => {
                self.source = other;
                None
            }
        }
    }
}

impl Iterator for TreeWalk {
    type Item = MatchResult<WalkEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let side = self.side;
        match &mut self.source {
            Source::Tree(inner) => Some(
                inner
                    .next()?
                    .map(WalkEntry::from)
                    .map_err(|source| MatchError::Walk { side, source }),
            ),
            Source::Listed(children) => children.next().map(Ok),
            Source::Done => None,
            Source::Root(_) | Source::Children(_) => self.advance_flat(),
        }
    }
}

fn read_error(side: TreeSide, path: &Path) -> impl Fn(std::io::Error) -> MatchError + '_ {
    move |source| MatchError::ReadDir {
        side,
        path: path.to_path_buf(),
        source,
    }
}

fn root_entry(root: &Path, side: TreeSide) -> MatchResult<WalkEntry> {
    let metadata = fs::metadata(root).map_err(read_error(side, root))?;
    let name = root
        .file_name()
        .unwrap_or(root.as_os_str())
        .to_os_string();
    Ok(WalkEntry {
        path: root.to_path_buf(),
        name,
        is_dir: metadata.is_dir(),
        depth: 0,
    })
}

/// List the direct children of `root` without opening any of them
fn list_children(root: &Path, side: TreeSide) -> MatchResult<Vec<WalkEntry>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(root).map_err(read_error(side, root))? {
        let entry = entry.map_err(read_error(side, root))?;
        let file_type = entry.file_type().map_err(read_error(side, root))?;
        children.push(WalkEntry {
            path: entry.path(),
            name: entry.file_name(),
            is_dir: file_type.is_dir(),
            depth: 1,
        });
    }
    children.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(children)
}
